//! Formatted block and token types.

use serde::{Deserialize, Serialize};

/// A structured block produced by a formatter and consumed once by the
/// HTML serializer.
///
/// Text carried in block payloads is already escaped and may contain inline
/// markup (`<strong>`, `<em>`, `<code>`, `<a>`, `<img>`) inserted by the
/// formatter that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormattedBlock {
    /// A body paragraph. Internal `\n` become `<br>` at serialization.
    Paragraph(String),

    /// A heading, level 1–3.
    Heading { level: u8, text: String },

    /// One line of highlighted source code, 1-indexed.
    CodeLine { number: usize, tokens: Vec<CodeToken> },

    /// One table row; consecutive rows are grouped into a single `<table>`.
    TableRow { cells: Vec<String>, header: bool },

    /// One list item; consecutive items of the same kind are grouped into
    /// one `<ul>` or `<ol>`.
    ListItem { ordered: bool, text: String },

    /// A block quote.
    Quote(String),

    /// A horizontal rule / section separator.
    Rule,

    /// An image reference with optional caption.
    Image {
        source: String,
        caption: Option<String>,
    },

    /// A metadata entry from the tabular metadata phase. A `None` value
    /// renders the key as bare text.
    Meta {
        key: String,
        value: Option<String>,
    },

    /// Verbatim content emitted as-is: the tabular `<pre>` fallback and the
    /// prose pass-through guard.
    Raw(String),
}

impl FormattedBlock {
    /// Create a heading block, clamping the level to 1–3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        FormattedBlock::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        FormattedBlock::Paragraph(text.into())
    }
}

/// Classification of a span within a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved word
    Keyword,
    /// Quoted string literal
    Str,
    /// `//` line comment
    Comment,
    /// Numeric literal
    Number,
    /// Anything not claimed by a highlighting rule
    Plain,
}

/// A contiguous span of a code line with its highlight classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeToken {
    /// Span text, already `<`/`>`-escaped
    pub text: String,
    /// Highlight classification
    pub kind: TokenKind,
}

impl CodeToken {
    /// Create a token.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        assert!(matches!(
            FormattedBlock::heading(7, "x"),
            FormattedBlock::Heading { level: 3, .. }
        ));
        assert!(matches!(
            FormattedBlock::heading(0, "x"),
            FormattedBlock::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn test_block_serialization_round_trip() {
        let block = FormattedBlock::CodeLine {
            number: 3,
            tokens: vec![
                CodeToken::new("let", TokenKind::Keyword),
                CodeToken::new(" x = ", TokenKind::Plain),
                CodeToken::new("42", TokenKind::Number),
            ],
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: FormattedBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
