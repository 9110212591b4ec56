//! Line-oriented code highlighting.
//!
//! Each input line becomes a numbered [`FormattedBlock::CodeLine`]. The four
//! highlighting rules are evaluated as independent span matches against the
//! escaped line and merged by rule priority in a single pass. Chaining
//! string substitutions instead would re-match keywords and digits inside
//! markup inserted by an earlier rule; the span model rules that out by
//! construction.

use super::inline::escape_angle;
use super::Formatter;
use crate::model::{CodeToken, FormattedBlock, TokenKind};
use regex::Regex;

/// Keywords highlighted as whole words, across the C-family/JS-ish languages
/// the code family covers.
const KEYWORDS: &[&str] = &[
    "function", "return", "if", "else", "for", "while", "class", "var", "let", "const", "import",
    "export", "from", "extends", "implements", "interface", "private", "public", "protected",
    "static", "async", "await", "try", "catch", "finally", "throw", "new", "this", "super", "null",
    "undefined", "true", "false",
];

/// Tokenizing code formatter for the code family.
pub struct CodeFormatter {
    keyword: Regex,
    string: Regex,
    comment: Regex,
    number: Regex,
}

/// A candidate highlight span within one line.
struct Span {
    start: usize,
    end: usize,
    kind: TokenKind,
}

impl CodeFormatter {
    /// Create a formatter with the compiled rule set.
    pub fn new() -> Self {
        let keyword_alt = KEYWORDS.join("|");
        Self {
            keyword: Regex::new(&format!(r"\b(?:{})\b", keyword_alt)).unwrap(),
            string: Regex::new(r#""[^"]*"|'[^']*'"#).unwrap(),
            comment: Regex::new(r"//.*").unwrap(),
            number: Regex::new(r"\d+(\.\d+)?").unwrap(),
        }
    }

    /// Tokenize one already-escaped line.
    fn tokenize(&self, line: &str) -> Vec<CodeToken> {
        let mut accepted: Vec<Span> = Vec::new();

        // Claiming priority: string > comment > keyword > number. A span
        // that overlaps an earlier-claimed span is discarded, so a
        // keyword-like substring inside a string literal stays
        // string-colored and digits in a comment stay comment-colored.
        let rules = [
            (&self.string, TokenKind::Str),
            (&self.comment, TokenKind::Comment),
            (&self.keyword, TokenKind::Keyword),
            (&self.number, TokenKind::Number),
        ];
        for (regex, kind) in rules {
            for m in regex.find_iter(line) {
                let overlaps = accepted
                    .iter()
                    .any(|s| m.start() < s.end && m.end() > s.start);
                if !overlaps {
                    accepted.push(Span {
                        start: m.start(),
                        end: m.end(),
                        kind,
                    });
                }
            }
        }
        accepted.sort_by_key(|s| s.start);

        // Single rendering pass: accepted spans plus plain gaps.
        let mut tokens = Vec::new();
        let mut cursor = 0;
        for span in &accepted {
            if span.start > cursor {
                tokens.push(CodeToken::new(&line[cursor..span.start], TokenKind::Plain));
            }
            tokens.push(CodeToken::new(&line[span.start..span.end], span.kind));
            cursor = span.end;
        }
        if cursor < line.len() {
            tokens.push(CodeToken::new(&line[cursor..], TokenKind::Plain));
        }
        tokens
    }
}

impl Formatter for CodeFormatter {
    fn format(&self, text: &str) -> Vec<FormattedBlock> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        // A trailing newline is a line terminator, not an extra empty line.
        if lines.len() > 1 && lines.last() == Some(&"") {
            lines.pop();
        }
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| FormattedBlock::CodeLine {
                number: index + 1,
                tokens: self.tokenize(&escape_angle(line)),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "code"
    }
}

impl Default for CodeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[CodeToken]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn joined(tokens: &[CodeToken]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_line_numbers_match_input_order() {
        let formatter = CodeFormatter::new();
        let blocks = formatter.format("a\nb\nc\nd");
        assert_eq!(blocks.len(), 4);
        for (i, block) in blocks.iter().enumerate() {
            match block {
                FormattedBlock::CodeLine { number, .. } => assert_eq!(*number, i + 1),
                other => panic!("expected code line, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_keyword_tokenized() {
        let formatter = CodeFormatter::new();
        let tokens = &match &formatter.format("return x;")[0] {
            FormattedBlock::CodeLine { tokens, .. } => tokens.clone(),
            _ => unreachable!(),
        };
        assert_eq!(tokens[0], CodeToken::new("return", TokenKind::Keyword));
        assert_eq!(tokens[1], CodeToken::new(" x;", TokenKind::Plain));
    }

    #[test]
    fn test_keyword_inside_string_stays_string() {
        let formatter = CodeFormatter::new();
        let tokens = formatter.tokenize(r#"return say("return if else")"#);
        // The bare keyword is claimed, but the string claims its interior.
        assert_eq!(tokens[0], CodeToken::new("return", TokenKind::Keyword));
        let string_token = tokens.iter().find(|t| t.kind == TokenKind::Str).unwrap();
        assert_eq!(string_token.text, r#""return if else""#);
        assert_eq!(
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Keyword)
                .count(),
            1
        );
    }

    #[test]
    fn test_number_inside_comment_stays_comment() {
        let formatter = CodeFormatter::new();
        let tokens = formatter.tokenize("x // adjust by 42");
        let comment = tokens.iter().find(|t| t.kind == TokenKind::Comment).unwrap();
        assert_eq!(comment.text, "// adjust by 42");
        assert!(!tokens.iter().any(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_numbers_and_strings() {
        let formatter = CodeFormatter::new();
        let tokens = formatter.tokenize("let pi = 3.14;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword,
                TokenKind::Plain,
                TokenKind::Number,
                TokenKind::Plain
            ]
        );
        assert_eq!(tokens[2].text, "3.14");
    }

    #[test]
    fn test_tokens_reassemble_escaped_line() {
        let formatter = CodeFormatter::new();
        let line = escape_angle(r#"if (a < 10) { msg = "x > y"; } // check"#);
        let tokens = formatter.tokenize(&line);
        assert_eq!(joined(&tokens), line);
    }

    #[test]
    fn test_escapes_angle_brackets_only() {
        let formatter = CodeFormatter::new();
        let blocks = formatter.format("a < b && c > d");
        let tokens = match &blocks[0] {
            FormattedBlock::CodeLine { tokens, .. } => tokens,
            _ => unreachable!(),
        };
        let text = joined(tokens);
        assert!(text.contains("&lt;"));
        assert!(text.contains("&gt;"));
        // && is left alone.
        assert!(text.contains("&&"));
    }

    #[test]
    fn test_trailing_newline_adds_no_extra_line() {
        let formatter = CodeFormatter::new();
        let blocks = formatter.format("a\nb\n");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(
            &blocks[1],
            FormattedBlock::CodeLine { number: 2, .. }
        ));

        // Only one terminator is dropped; a blank line before it survives.
        let blocks = formatter.format("a\n\n");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        let formatter = CodeFormatter::new();
        let blocks = formatter.format("");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(
            &blocks[0],
            FormattedBlock::CodeLine { number: 1, tokens } if tokens.is_empty()
        ));
    }
}
