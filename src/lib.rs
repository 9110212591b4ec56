//! # docview
//!
//! Document rendering pipeline: raw extracted text plus filename/MIME hints
//! in, themed structured HTML out.
//!
//! The pipeline classifies the input into a content family, resolves a
//! per-family color theme, formats the text with a family-specific
//! algorithm (code tokenizer, minimal Markdown, tabular extractor, slide
//! and page segmenters, prose classifier), and assembles the final
//! document. Every step is a pure function of immutable inputs; the whole
//! pipeline may be called concurrently without coordination.
//!
//! ## Quick Start
//!
//! ```
//! use docview::{render_text, RenderOptions};
//!
//! fn main() -> docview::Result<()> {
//!     let doc = render_text(
//!         "# Notes\n\nSome **bold** text.",
//!         "notes.md",
//!         "text/markdown",
//!         &RenderOptions::default(),
//!     )?;
//!     println!("{}", doc.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Seven content families**: Word, Excel, PowerPoint, PDF, code,
//!   Markdown, and plain text, with plain text as the total fallback
//! - **Per-family themes**: fixed primaries with derived dark/light blends
//! - **Pure and stateless**: no caching, no shared mutable state
//! - **Bounded**: configurable maximum input length, explicit errors for
//!   empty and oversized input
//!
//! Binary-format text extraction is out of scope; plug an extractor in
//! through the [`source::DocumentSource`] trait.

pub mod classify;
pub mod error;
pub mod format;
pub mod model;
pub mod render;
pub mod source;
pub mod theme;

// Re-export commonly used types
pub use classify::{classify, DocumentFamily};
pub use error::{Error, Result};
pub use format::{format_for_family, Formatter};
pub use model::{CodeToken, FormattedBlock, RawDocument, RenderedDocument, TokenKind};
pub use render::{DocumentRenderer, RenderOptions};
pub use source::{render_source, DocumentSource, FileSource};
pub use theme::{resolve_theme, Rgb, ThemeSpec};

/// Render raw text into a themed HTML document.
///
/// # Arguments
///
/// * `text` - Extracted plain text
/// * `filename` - Filename hint for classification (may be empty)
/// * `mime` - MIME type hint for classification (may be empty)
/// * `options` - Rendering options
pub fn render_text(
    text: &str,
    filename: &str,
    mime: &str,
    options: &RenderOptions,
) -> Result<RenderedDocument> {
    let raw = RawDocument::new(text, filename, mime);
    let title = source::clean_title(filename);
    DocumentRenderer::with_options(options.clone()).render(&raw, &title)
}

/// Builder for configuring and driving the pipeline.
///
/// # Example
///
/// ```
/// use docview::Docview;
///
/// let doc = Docview::new()
///     .with_max_input_len(1024 * 1024)
///     .without_footer()
///     .render_text("Plain paragraph.", "note.txt", "text/plain")?;
/// # Ok::<(), docview::Error>(())
/// ```
pub struct Docview {
    options: RenderOptions,
}

impl Docview {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set the maximum accepted input length in bytes.
    pub fn with_max_input_len(mut self, bytes: usize) -> Self {
        self.options = self.options.with_max_input_len(bytes);
        self
    }

    /// Skip the footer timestamp.
    pub fn without_footer(mut self) -> Self {
        self.options = self.options.with_footer(false);
        self
    }

    /// Use solid instead of dashed section separators.
    pub fn solid_breaks(mut self) -> Self {
        self.options = self.options.with_dashed_breaks(false);
        self
    }

    /// Hide code line numbers.
    pub fn without_line_numbers(mut self) -> Self {
        self.options = self.options.with_line_numbers(false);
        self
    }

    /// Render raw text with the configured options.
    pub fn render_text(
        &self,
        text: &str,
        filename: &str,
        mime: &str,
    ) -> Result<RenderedDocument> {
        render_text(text, filename, mime, &self.options)
    }

    /// Render a document source with the configured options.
    pub fn render_source(&self, source: &dyn DocumentSource) -> Result<RenderedDocument> {
        source::render_source(source, &self.options)
    }
}

impl Default for Docview {
    fn default() -> Self {
        Self::new()
    }
}
