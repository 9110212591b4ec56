//! Document family classification from MIME type and filename hints.

use serde::{Deserialize, Serialize};

/// Coarse content classification driving formatter and theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFamily {
    /// Word-processing documents (.doc, .docx, .rtf)
    Word,
    /// Spreadsheets and delimited data (.xls, .xlsx, .csv)
    Excel,
    /// Slide decks (.ppt, .pptx)
    PowerPoint,
    /// PDF page dumps
    Pdf,
    /// Source code and structured text (.json, .js, .py, ...)
    Code,
    /// Markdown (.md, .markdown)
    Markdown,
    /// Plain text; also the fallback for anything unrecognized
    Text,
}

impl std::fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentFamily::Word => "word",
            DocumentFamily::Excel => "excel",
            DocumentFamily::PowerPoint => "powerpoint",
            DocumentFamily::Pdf => "pdf",
            DocumentFamily::Code => "code",
            DocumentFamily::Markdown => "markdown",
            DocumentFamily::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// MIME substrings that identify the code family.
const CODE_MIME_HINTS: &[&str] = &["json", "javascript", "xml", "html", "css"];

/// File extensions that identify the code family.
const CODE_EXTENSIONS: &[&str] = &[
    "json", "xml", "html", "css", "js", "java", "py", "c", "cpp", "cs",
];

/// Classify a document into a family from its MIME type and filename.
///
/// Total and deterministic: every input resolves to a family, with
/// [`DocumentFamily::Text`] as the only fallback. MIME substring checks run
/// first in priority order, then case-insensitive extension checks, so a
/// specific extension wins over a generic MIME type like
/// `application/octet-stream`.
///
/// # Example
/// ```
/// use docview::classify::{classify, DocumentFamily};
///
/// let family = classify("application/octet-stream", "report.XLSX");
/// assert_eq!(family, DocumentFamily::Excel);
/// ```
pub fn classify(mime_hint: &str, filename: &str) -> DocumentFamily {
    let mime = mime_hint.to_ascii_lowercase();

    if mime.contains("wordprocessing") {
        return DocumentFamily::Word;
    }
    if mime.contains("spreadsheet") || mime.contains("excel") {
        return DocumentFamily::Excel;
    }
    if mime.contains("presentation") {
        return DocumentFamily::PowerPoint;
    }
    if mime.contains("markdown") {
        return DocumentFamily::Markdown;
    }
    if mime.contains("text/plain") {
        return DocumentFamily::Text;
    }
    if mime.contains("pdf") {
        return DocumentFamily::Pdf;
    }
    if CODE_MIME_HINTS.iter().any(|hint| mime.contains(hint)) {
        return DocumentFamily::Code;
    }

    let family = match extension(filename).as_deref() {
        Some("doc") | Some("docx") | Some("rtf") => DocumentFamily::Word,
        Some("xls") | Some("xlsx") | Some("csv") => DocumentFamily::Excel,
        Some("ppt") | Some("pptx") => DocumentFamily::PowerPoint,
        Some("md") | Some("markdown") => DocumentFamily::Markdown,
        Some("txt") => DocumentFamily::Text,
        Some("pdf") => DocumentFamily::Pdf,
        Some(ext) if CODE_EXTENSIONS.contains(&ext) => DocumentFamily::Code,
        _ => DocumentFamily::Text,
    };

    log::debug!("classified mime={:?} filename={:?} as {}", mime_hint, filename, family);
    family
}

/// Lowercased extension of a filename, without the dot.
fn extension(filename: &str) -> Option<String> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
