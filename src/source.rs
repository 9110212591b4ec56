//! Collaborator seam for text extraction.
//!
//! Binary-format extraction (doc/xlsx/pptx/pdf to plain text) lives outside
//! this crate. Callers implement [`DocumentSource`] over whatever extractor
//! they have; the pipeline only sees text plus hints. Extraction failures
//! surface as [`Error::ExtractionFailed`] and are never retried here.

use crate::error::{Error, Result};
use crate::model::{RawDocument, RenderedDocument};
use crate::render::{DocumentRenderer, RenderOptions};
use std::path::{Path, PathBuf};

/// A document that can yield extracted text plus classification hints.
pub trait DocumentSource {
    /// Extract the plain text content.
    fn extract_text(&self) -> Result<String>;

    /// Filename hint for classification (may be empty).
    fn file_name(&self) -> String;

    /// MIME type hint for classification (may be empty).
    fn mime_type(&self) -> String;
}

/// Render a source end to end: extract, classify, theme, format, assemble.
///
/// The title is the file name with its extension stripped.
pub fn render_source(source: &dyn DocumentSource, options: &RenderOptions) -> Result<RenderedDocument> {
    let text = source
        .extract_text()
        .map_err(|e| match e {
            already @ Error::ExtractionFailed(_) => already,
            other => Error::ExtractionFailed(other.to_string()),
        })?;

    let file_name = source.file_name();
    let raw = RawDocument::new(text, file_name.clone(), source.mime_type());
    let title = clean_title(&file_name);
    DocumentRenderer::with_options(options.clone()).render(&raw, &title)
}

/// Strip the extension from a file name for display.
pub(crate) fn clean_title(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// A plain-text file on disk. MIME is guessed from the extension; binary
/// formats need a real extractor behind [`DocumentSource`].
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn guess_mime(path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("md") | Some("markdown") => "text/markdown",
            Some("csv") => "text/csv",
            Some("json") => "application/json",
            Some("html") => "text/html",
            Some("txt") => "text/plain",
            _ => "",
        }
        .to_string()
    }
}

impl DocumentSource for FileSource {
    fn extract_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| Error::ExtractionFailed(format!("{}: {}", self.path.display(), e)))
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string()
    }

    fn mime_type(&self) -> String {
        Self::guess_mime(&self.path)
    }
}
