//! Slide and page formatting.
//!
//! Both segment text on runs of 3+ consecutive newlines, the soft break
//! heuristic standing in for real slide/page markers in extracted text.
//! Slides get a heading plus an all-or-nothing list/prose body; pages pass
//! each section through the prose formatter.

use super::inline::escape_angle;
use super::{Formatter, ProseFormatter};
use crate::model::FormattedBlock;
use regex::Regex;

/// Split text into sections on 3+ consecutive newlines.
fn sections(text: &str) -> Vec<String> {
    let breaker = Regex::new(r"\n{3,}").unwrap();
    breaker
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Bullet characters that mark an unordered list body.
const BULLETS: &[char] = &['\u{2022}', '-', '*'];

/// Slide formatter for the presentation family.
pub struct SlideFormatter {
    ordered_marker: Regex,
}

impl SlideFormatter {
    /// Create a formatter with the compiled rule set.
    pub fn new() -> Self {
        Self {
            ordered_marker: Regex::new(r"^\d+\.\s*").unwrap(),
        }
    }

    /// Format one slide body. The body is classified as a whole: any bullet
    /// line makes the entire remainder an unordered list, else any numbered
    /// line makes it an ordered list, else it is prose paragraphs.
    fn format_body(&self, body_lines: &[&str], blocks: &mut Vec<FormattedBlock>) {
        let non_blank: Vec<&str> = body_lines
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if non_blank.is_empty() {
            return;
        }

        let has_bullet = non_blank
            .iter()
            .any(|line| line.trim_start().starts_with(BULLETS));
        if has_bullet {
            for line in non_blank {
                let item = line
                    .trim_start()
                    .trim_start_matches(BULLETS)
                    .trim_start();
                blocks.push(FormattedBlock::ListItem {
                    ordered: false,
                    text: escape_angle(item),
                });
            }
            return;
        }

        let has_number = non_blank
            .iter()
            .any(|line| self.ordered_marker.is_match(line.trim_start()));
        if has_number {
            for line in non_blank {
                let trimmed = line.trim_start();
                let item = self.ordered_marker.replace(trimmed, "");
                blocks.push(FormattedBlock::ListItem {
                    ordered: true,
                    text: escape_angle(item.trim()),
                });
            }
            return;
        }

        // Prose body: paragraphs split on blank lines.
        let mut current: Vec<&str> = Vec::new();
        for line in body_lines {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(FormattedBlock::paragraph(escape_angle(&current.join("\n"))));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(FormattedBlock::paragraph(escape_angle(&current.join("\n"))));
        }
    }
}

impl Formatter for SlideFormatter {
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        let sections = sections(text);
        log::debug!("slide formatter found {} section(s)", sections.len());
        let mut blocks = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                blocks.push(FormattedBlock::Rule);
            }

            let lines: Vec<&str> = section.lines().collect();
            let heading_pos = lines.iter().position(|line| !line.trim().is_empty());
            let Some(pos) = heading_pos else { continue };

            blocks.push(FormattedBlock::heading(2, escape_angle(lines[pos].trim())));
            self.format_body(&lines[pos + 1..], &mut blocks);
        }

        blocks
    }

    fn name(&self) -> &'static str {
        "slides"
    }
}

impl Default for SlideFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Page formatter for the PDF family: prose per section, dashed page-break
/// rules between sections.
pub struct PageFormatter {
    prose: ProseFormatter,
}

impl PageFormatter {
    /// Create the formatter.
    pub fn new() -> Self {
        Self {
            prose: ProseFormatter::new(),
        }
    }
}

impl Formatter for PageFormatter {
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        let sections = sections(text);
        log::debug!("page formatter found {} page(s)", sections.len());
        let mut blocks = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if index > 0 {
                blocks.push(FormattedBlock::Rule);
            }
            blocks.extend(self.prose.format(section));
        }

        blocks
    }

    fn name(&self) -> &'static str {
        "pages"
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
