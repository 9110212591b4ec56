//! Pipeline composition: classify, theme, format, serialize.

use super::{html, RenderOptions};
use crate::classify::classify;
use crate::error::{Error, Result};
use crate::format::format_for_family;
use crate::model::{RawDocument, RenderedDocument};
use crate::theme::resolve_theme;
use chrono::Utc;

/// Composes the full rendering pipeline. Stateless; a single renderer may
/// be shared across threads and invoked concurrently.
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a raw document into themed HTML.
    ///
    /// Fails with [`Error::InputTooLarge`] when the text exceeds the
    /// configured bound and [`Error::EmptyDocument`] when the input is blank
    /// or the formatter produced no content; classification and theming
    /// themselves never fail.
    pub fn render(&self, raw: &RawDocument, clean_title: &str) -> Result<RenderedDocument> {
        if raw.len() > self.options.max_input_len {
            return Err(Error::InputTooLarge {
                size: raw.len(),
                limit: self.options.max_input_len,
            });
        }
        if raw.is_blank() {
            return Err(Error::EmptyDocument);
        }

        let family = classify(&raw.mime_hint, &raw.filename_hint);
        let theme = resolve_theme(family);

        let blocks = format_for_family(family, &raw.text);
        if blocks.is_empty() {
            return Err(Error::EmptyDocument);
        }

        Ok(RenderedDocument {
            title: clean_title.to_string(),
            theme,
            body: html::serialize(&blocks, &theme, &self.options),
            footer: self.options.include_footer.then(Utc::now),
        })
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::DocumentFamily;

    #[test]
    fn test_render_markdown_document() {
        let raw = RawDocument::new("# Report\n\nAll good.", "report.md", "text/markdown");
        let doc = DocumentRenderer::new().render(&raw, "Report").unwrap();

        assert_eq!(doc.title, "Report");
        assert_eq!(doc.theme.family, DocumentFamily::Markdown);
        assert_eq!(doc.theme.primary.hex(), "#764ABC");
        assert!(doc.body.contains(">Report</h1>"));
        assert!(doc.body.contains("<p>All good.</p>"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let raw = RawDocument::new("", "a.txt", "text/plain");
        let result = DocumentRenderer::new().render(&raw, "a");
        assert!(matches!(result, Err(Error::EmptyDocument)));

        let raw = RawDocument::new("   \n\t\n", "a.txt", "text/plain");
        let result = DocumentRenderer::new().render(&raw, "a");
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_input_too_large() {
        let options = RenderOptions::new().with_max_input_len(8);
        let raw = RawDocument::new("way past the bound", "a.txt", "");
        let result = DocumentRenderer::with_options(options).render(&raw, "a");
        assert!(matches!(
            result,
            Err(Error::InputTooLarge { size: 18, limit: 8 })
        ));
    }

    #[test]
    fn test_unclassified_input_renders_as_prose() {
        let raw = RawDocument::new("Just some text.", "mystery.bin", "application/octet-stream");
        let doc = DocumentRenderer::new().render(&raw, "mystery").unwrap();
        assert_eq!(doc.theme.family, DocumentFamily::Text);
        assert!(doc.body.contains("<p>Just some text.</p>"));
    }

    #[test]
    fn test_footer_toggle() {
        let raw = RawDocument::new("hello", "a.txt", "");
        let with = DocumentRenderer::new().render(&raw, "a").unwrap();
        assert!(with.footer.is_some());

        let options = RenderOptions::new().with_footer(false);
        let without = DocumentRenderer::with_options(options)
            .render(&raw, "a")
            .unwrap();
        assert!(without.footer.is_none());
    }

    #[test]
    fn test_code_document_gets_line_numbers() {
        let raw = RawDocument::new("let x = 1;\nreturn x;", "main.js", "");
        let doc = DocumentRenderer::new().render(&raw, "main.js").unwrap();
        assert_eq!(doc.theme.family, DocumentFamily::Code);
        assert!(doc.body.contains("<pre"));
        assert!(doc.body.contains(">let</span>"));
    }
}
