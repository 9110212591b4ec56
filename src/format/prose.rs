//! Prose formatting for word-processing text and the default fallback.

use super::inline::escape_angle;
use super::Formatter;
use crate::model::FormattedBlock;

/// Paragraphs shorter than this that end with a colon read as label headings.
const LABEL_HEADING_MAX: usize = 100;
/// Paragraphs shorter than this in all-caps read as shout headings.
const SHOUT_HEADING_MAX: usize = 50;

/// Paragraph-classifying prose formatter.
pub struct ProseFormatter;

impl ProseFormatter {
    /// Create the formatter.
    pub fn new() -> Self {
        Self
    }

    /// Split text on blank lines into paragraph runs.
    fn paragraphs(text: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    result.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            result.push(current.join("\n"));
        }
        result
    }

    /// Classify one paragraph into a block. Thresholds count characters,
    /// not bytes, so multibyte text classifies the same as ASCII.
    fn classify_paragraph(text: &str) -> FormattedBlock {
        let trimmed = text.trim();
        let chars = trimmed.chars().count();
        if chars < LABEL_HEADING_MAX && trimmed.ends_with(':') {
            return FormattedBlock::heading(3, escape_angle(trimmed));
        }
        if chars < SHOUT_HEADING_MAX && !trimmed.is_empty() && trimmed == trimmed.to_uppercase() {
            return FormattedBlock::heading(2, escape_angle(trimmed));
        }
        FormattedBlock::paragraph(escape_angle(text))
    }
}

impl Formatter for ProseFormatter {
    /// Format prose text.
    ///
    /// Input that already carries `<h1>`, `<p>`, or `<div>` markup passes
    /// through unchanged, so formatting already-formatted output is a no-op.
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        if text.contains("<h1>") || text.contains("<p>") || text.contains("<div>") {
            return vec![FormattedBlock::Raw(text.to_string())];
        }

        Self::paragraphs(text)
            .iter()
            .map(|p| Self::classify_paragraph(p))
            .collect()
    }

    fn name(&self) -> &'static str {
        "prose"
    }
}

impl Default for ProseFormatter {
    fn default() -> Self {
        Self::new()
    }
}
