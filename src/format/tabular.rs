//! Tabular formatting for spreadsheet-family text.
//!
//! Two phases: a metadata prelude (author/title/worksheet lines emitted as
//! key/value tags) followed by delimiter-split data rows. One delimiter is
//! assumed consistent per document, picked by priority from whatever is
//! present. Inconsistent cell counts across rows are rendered as-is;
//! leniency here is deliberate.

use super::inline::escape_angle;
use super::Formatter;
use crate::model::FormattedBlock;

/// Words that mark a prelude line as metadata even without a colon.
const META_MARKERS: &[&str] = &["author", "title", "subject", "sheet", "created", "modified"];

/// Cell delimiters in detection priority order.
const DELIMITERS: &[char] = &['\t', ',', ';', '|'];

/// Formatter for the spreadsheet family.
pub struct TabularFormatter;

impl TabularFormatter {
    /// Create the formatter.
    pub fn new() -> Self {
        Self
    }

    /// Whether a line belongs to the metadata prelude.
    fn is_metadata_line(line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        (line.contains(':') && !line.contains('\t'))
            || lower.contains("worksheet")
            || META_MARKERS
                .iter()
                .any(|marker| lower.trim_start().starts_with(marker))
    }

    /// First delimiter class present in any data line.
    fn detect_delimiter(lines: &[&str]) -> Option<char> {
        DELIMITERS
            .iter()
            .copied()
            .find(|d| lines.iter().any(|line| line.contains(*d)))
    }
}

impl Formatter for TabularFormatter {
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        let lines: Vec<&str> = text.lines().collect();
        let mut blocks = Vec::new();

        // Metadata phase: consume consecutive qualifying lines from the top;
        // a blank line or the first non-qualifying line ends the prelude.
        let mut data_start = 0;
        for line in &lines {
            if line.trim().is_empty() || !Self::is_metadata_line(line) {
                break;
            }
            let block = match line.split_once(':') {
                Some((key, value)) => FormattedBlock::Meta {
                    key: escape_angle(key.trim()),
                    value: Some(escape_angle(value.trim())),
                },
                None => FormattedBlock::Meta {
                    key: escape_angle(line.trim()),
                    value: None,
                },
            };
            blocks.push(block);
            data_start += 1;
        }

        // Data phase: remaining non-blank lines become rows.
        let data_lines: Vec<&str> = lines[data_start..]
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if data_lines.is_empty() {
            if blocks.is_empty() {
                log::warn!("tabular input had no metadata and no data rows, dumping verbatim");
                blocks.push(FormattedBlock::Raw(format!(
                    "<pre>{}</pre>",
                    escape_angle(text)
                )));
            }
            return blocks;
        }

        let delimiter = Self::detect_delimiter(&data_lines);
        let has_header = data_lines.len() >= 2;
        for (index, line) in data_lines.iter().enumerate() {
            let cells: Vec<String> = match delimiter {
                Some(d) => line.split(d).map(|cell| escape_angle(cell.trim())).collect(),
                None => vec![escape_angle(line.trim())],
            };
            blocks.push(FormattedBlock::TableRow {
                cells,
                header: has_header && index == 0,
            });
        }

        blocks
    }

    fn name(&self) -> &'static str {
        "tabular"
    }
}

impl Default for TabularFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_then_table() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("Author: Jane\nSheet: Sales\nA\tB\n1\t2\n3\t4");
        assert_eq!(
            blocks[0],
            FormattedBlock::Meta {
                key: "Author".to_string(),
                value: Some("Jane".to_string())
            }
        );
        assert_eq!(
            blocks[1],
            FormattedBlock::Meta {
                key: "Sheet".to_string(),
                value: Some("Sales".to_string())
            }
        );
        assert_eq!(
            blocks[2],
            FormattedBlock::TableRow {
                cells: vec!["A".to_string(), "B".to_string()],
                header: true
            }
        );
        assert_eq!(
            blocks[3],
            FormattedBlock::TableRow {
                cells: vec!["1".to_string(), "2".to_string()],
                header: false
            }
        );
        assert_eq!(
            blocks[4],
            FormattedBlock::TableRow {
                cells: vec!["3".to_string(), "4".to_string()],
                header: false
            }
        );
    }

    #[test]
    fn test_tab_beats_comma() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("a,b\tc,d\ne,f\tg,h");
        // Tab is the higher-priority delimiter, commas stay inside cells.
        assert_eq!(
            blocks[0],
            FormattedBlock::TableRow {
                cells: vec!["a,b".to_string(), "c,d".to_string()],
                header: true
            }
        );
    }

    #[test]
    fn test_comma_delimited() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("name,age\nBob,42");
        assert_eq!(
            blocks[0],
            FormattedBlock::TableRow {
                cells: vec!["name".to_string(), "age".to_string()],
                header: true
            }
        );
    }

    #[test]
    fn test_single_row_has_no_header() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("only|row|here");
        assert_eq!(
            blocks,
            vec![FormattedBlock::TableRow {
                cells: vec!["only".to_string(), "row".to_string(), "here".to_string()],
                header: false
            }]
        );
    }

    #[test]
    fn test_empty_input_dumps_verbatim() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("   ");
        assert_eq!(blocks, vec![FormattedBlock::Raw("<pre>   </pre>".to_string())]);
    }

    #[test]
    fn test_metadata_stops_at_blank_line() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("Title: Report\n\nName: ignored as metadata\nx\ty");
        assert_eq!(
            blocks[0],
            FormattedBlock::Meta {
                key: "Title".to_string(),
                value: Some("Report".to_string())
            }
        );
        // Everything after the blank line is data, colon or not.
        assert!(matches!(blocks[1], FormattedBlock::TableRow { .. }));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_worksheet_marker_without_colon() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("Worksheet 1\na\tb\nc\td");
        assert_eq!(
            blocks[0],
            FormattedBlock::Meta {
                key: "Worksheet 1".to_string(),
                value: None
            }
        );
    }

    #[test]
    fn test_inconsistent_cell_counts_rendered_as_is() {
        let formatter = TabularFormatter::new();
        let blocks = formatter.format("a\tb\tc\n1\t2");
        assert_eq!(
            blocks[0],
            FormattedBlock::TableRow {
                cells: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                header: true
            }
        );
        assert_eq!(
            blocks[1],
            FormattedBlock::TableRow {
                cells: vec!["1".to_string(), "2".to_string()],
                header: false
            }
        );
    }
}
