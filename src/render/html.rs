//! Block-to-HTML serialization.
//!
//! Consumes a formatter's block sequence exactly once and emits markup from
//! the fixed viewer tag vocabulary, with theme colors applied as inline
//! styles. Adjacent blocks of the same grouped kind (code lines, table
//! rows, list items, metadata tags) are collected into one container.

use super::RenderOptions;
use crate::model::{CodeToken, FormattedBlock, TokenKind};
use crate::theme::ThemeSpec;

/// Highlight colors shared across themes.
const STRING_COLOR: &str = "#2E7D32";
const COMMENT_COLOR: &str = "#9E9E9E";
const NUMBER_COLOR: &str = "#E65100";
const LINE_NUMBER_COLOR: &str = "#9E9E9E";
const CODE_BACKGROUND: &str = "#F5F5F5";

/// Serialize a block sequence to HTML.
pub fn serialize(blocks: &[FormattedBlock], theme: &ThemeSpec, options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < blocks.len() {
        match &blocks[i] {
            FormattedBlock::Paragraph(text) => {
                out.push_str("<p>");
                out.push_str(&text.replace('\n', "<br>"));
                out.push_str("</p>\n");
                i += 1;
            }
            FormattedBlock::Heading { level, text } => {
                let color = theme.dark.hex();
                out.push_str(&format!(
                    "<h{level} style=\"color:{color};\">{text}</h{level}>\n"
                ));
                i += 1;
            }
            FormattedBlock::Quote(text) => {
                out.push_str(&format!(
                    "<blockquote style=\"border-left:4px solid {};padding-left:12px;\">{}</blockquote>\n",
                    theme.primary.hex(),
                    text
                ));
                i += 1;
            }
            FormattedBlock::Rule => {
                let style = if options.dashed_section_breaks {
                    format!("border:none;border-top:2px dashed {};", theme.light.hex())
                } else {
                    format!("border:none;border-top:2px solid {};", theme.light.hex())
                };
                out.push_str(&format!("<hr style=\"{}\">\n", style));
                i += 1;
            }
            FormattedBlock::Image { source, caption } => {
                out.push_str(&format!("<img src=\"{}\" alt=\"\">\n", source));
                if let Some(caption) = caption {
                    out.push_str(&format!(
                        "<p style=\"color:{};\">{}</p>\n",
                        COMMENT_COLOR, caption
                    ));
                }
                i += 1;
            }
            FormattedBlock::Raw(content) => {
                out.push_str(content);
                out.push('\n');
                i += 1;
            }
            FormattedBlock::CodeLine { .. } => {
                i = serialize_code_run(blocks, i, theme, options, &mut out);
            }
            FormattedBlock::TableRow { .. } => {
                i = serialize_table_run(blocks, i, theme, &mut out);
            }
            FormattedBlock::ListItem { .. } => {
                i = serialize_list_run(blocks, i, &mut out);
            }
            FormattedBlock::Meta { .. } => {
                i = serialize_meta_run(blocks, i, theme, &mut out);
            }
        }
    }

    out
}

fn serialize_tokens(tokens: &[CodeToken], theme: &ThemeSpec, out: &mut String) {
    for token in tokens {
        match token.kind {
            TokenKind::Plain => out.push_str(&token.text),
            kind => {
                let color = match kind {
                    TokenKind::Keyword => theme.primary.hex(),
                    TokenKind::Str => STRING_COLOR.to_string(),
                    TokenKind::Comment => COMMENT_COLOR.to_string(),
                    TokenKind::Number => NUMBER_COLOR.to_string(),
                    TokenKind::Plain => unreachable!(),
                };
                out.push_str(&format!(
                    "<span style=\"color:{};\">{}</span>",
                    color, token.text
                ));
            }
        }
    }
}

/// Serialize a run of code lines into one `<pre>` block.
fn serialize_code_run(
    blocks: &[FormattedBlock],
    start: usize,
    theme: &ThemeSpec,
    options: &RenderOptions,
    out: &mut String,
) -> usize {
    out.push_str(&format!(
        "<pre style=\"background-color:{};padding:8px;\">\n",
        CODE_BACKGROUND
    ));
    let mut i = start;
    while let Some(FormattedBlock::CodeLine { number, tokens }) = blocks.get(i) {
        out.push_str("<div>");
        if options.line_numbers {
            out.push_str(&format!(
                "<span style=\"color:{};\">{:>4}</span> ",
                LINE_NUMBER_COLOR, number
            ));
        }
        serialize_tokens(tokens, theme, out);
        out.push_str("</div>\n");
        i += 1;
    }
    out.push_str("</pre>\n");
    i
}

/// Serialize a run of table rows into one `<table>`.
fn serialize_table_run(
    blocks: &[FormattedBlock],
    start: usize,
    theme: &ThemeSpec,
    out: &mut String,
) -> usize {
    out.push_str("<table style=\"border-collapse:collapse;\">\n");
    let mut i = start;
    while let Some(FormattedBlock::TableRow { cells, header }) = blocks.get(i) {
        out.push_str("<tr>");
        for cell in cells {
            if *header {
                out.push_str(&format!(
                    "<th style=\"background-color:{};color:#FFFFFF;padding:4px 8px;\">{}</th>",
                    theme.primary.hex(),
                    cell
                ));
            } else {
                out.push_str(&format!(
                    "<td style=\"border:1px solid {};padding:4px 8px;\">{}</td>",
                    theme.light.hex(),
                    cell
                ));
            }
        }
        out.push_str("</tr>\n");
        i += 1;
    }
    out.push_str("</table>\n");
    i
}

/// Serialize a run of same-kind list items into one `<ul>` or `<ol>`.
fn serialize_list_run(blocks: &[FormattedBlock], start: usize, out: &mut String) -> usize {
    let ordered = matches!(blocks[start], FormattedBlock::ListItem { ordered: true, .. });
    let tag = if ordered { "ol" } else { "ul" };

    out.push_str(&format!("<{}>\n", tag));
    let mut i = start;
    while let Some(FormattedBlock::ListItem {
        ordered: item_ordered,
        text,
    }) = blocks.get(i)
    {
        if *item_ordered != ordered {
            break;
        }
        out.push_str(&format!("<li>{}</li>\n", text));
        i += 1;
    }
    out.push_str(&format!("</{}>\n", tag));
    i
}

/// Serialize a run of metadata entries into one horizontal wrap container.
fn serialize_meta_run(
    blocks: &[FormattedBlock],
    start: usize,
    theme: &ThemeSpec,
    out: &mut String,
) -> usize {
    out.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:6px;\">\n");
    let mut i = start;
    while let Some(FormattedBlock::Meta { key, value }) = blocks.get(i) {
        let label = match value {
            Some(value) => format!("{}: {}", key, value),
            None => key.clone(),
        };
        out.push_str(&format!(
            "<span style=\"background-color:{};color:#FFFFFF;padding:2px 8px;\">{}</span>\n",
            theme.light.hex(),
            label
        ));
        i += 1;
    }
    out.push_str("</div>\n");
    i
}
