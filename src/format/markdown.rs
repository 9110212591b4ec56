//! Minimal Markdown formatting.
//!
//! Deliberately small surface: line-anchored headings, quotes, and rules,
//! blank-line paragraphs, and the inline rules from [`super::inline`]. No
//! nested lists, tables, or fenced code blocks; that is a documented
//! limitation of the source material, not a gap to fill.

use super::inline::{escape_angle, InlineRules};
use super::Formatter;
use crate::model::FormattedBlock;
use regex::Regex;

/// Minimal Markdown formatter.
pub struct MarkdownFormatter {
    rule_line: Regex,
    inline: InlineRules,
}

impl MarkdownFormatter {
    /// Create a formatter with the compiled rule set.
    pub fn new() -> Self {
        Self {
            rule_line: Regex::new(r"^-{3,}$").unwrap(),
            inline: InlineRules::new(),
        }
    }

    fn flush_paragraph(&self, buffer: &mut Vec<String>, blocks: &mut Vec<FormattedBlock>) {
        if buffer.is_empty() {
            return;
        }
        let text = buffer.join("\n");
        buffer.clear();
        blocks.push(FormattedBlock::paragraph(
            self.inline.apply(&escape_angle(&text)),
        ));
    }
}

impl Formatter for MarkdownFormatter {
    /// Format Markdown text.
    ///
    /// Headings are emitted as dedicated blocks rather than text wrapped in
    /// a paragraph, so a heading can never end up inside `<p>` in the final
    /// markup.
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        let mut blocks = Vec::new();
        let mut paragraph: Vec<String> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim_end();

            if trimmed.trim().is_empty() {
                self.flush_paragraph(&mut paragraph, &mut blocks);
                continue;
            }

            // Longest heading prefix first, or "## x" reads as an H1.
            let heading = [("### ", 3u8), ("## ", 2), ("# ", 1)]
                .iter()
                .find_map(|(prefix, level)| {
                    trimmed.strip_prefix(prefix).map(|rest| (*level, rest))
                });
            if let Some((level, rest)) = heading {
                self.flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(FormattedBlock::heading(
                    level,
                    self.inline.apply(&escape_angle(rest.trim())),
                ));
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix("> ").or_else(|| {
                trimmed.strip_prefix('>')
            }) {
                self.flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(FormattedBlock::Quote(
                    self.inline.apply(&escape_angle(rest.trim())),
                ));
                continue;
            }

            if self.rule_line.is_match(trimmed.trim()) {
                self.flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(FormattedBlock::Rule);
                continue;
            }

            paragraph.push(trimmed.to_string());
        }
        self.flush_paragraph(&mut paragraph, &mut blocks);

        blocks
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}
