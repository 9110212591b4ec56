//! Document-level input and output types.

use crate::theme::ThemeSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw input to the rendering pipeline: extracted text plus the hints used
/// for classification. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Extracted plain text
    pub text: String,

    /// Filename hint (may be empty)
    pub filename_hint: String,

    /// MIME type hint (may be empty)
    pub mime_hint: String,
}

impl RawDocument {
    /// Create a raw document from text and hints.
    pub fn new(
        text: impl Into<String>,
        filename_hint: impl Into<String>,
        mime_hint: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            filename_hint: filename_hint.into(),
            mime_hint: mime_hint.into(),
        }
    }

    /// Whether the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Input size in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Final rendered document, handed to the host viewer and discarded after
/// consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Display title
    pub title: String,

    /// Resolved color palette
    pub theme: ThemeSpec,

    /// Body markup, restricted to the fixed viewer tag vocabulary
    pub body: String,

    /// Render timestamp shown in the footer; `None` when the footer is
    /// disabled through render options
    pub footer: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_blank() {
        assert!(RawDocument::new("", "a.txt", "").is_blank());
        assert!(RawDocument::new("  \n\t ", "a.txt", "").is_blank());
        assert!(!RawDocument::new("hello", "a.txt", "").is_blank());
    }

    #[test]
    fn test_raw_document_len() {
        let doc = RawDocument::new("hello", "a.txt", "text/plain");
        assert_eq!(doc.len(), 5);
        assert!(!doc.is_empty());
    }
}
