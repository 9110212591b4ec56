//! Shared escaping and inline markup helpers.

use regex::Regex;

/// Escape `<` and `>` for embedding in markup.
///
/// `&` is deliberately left alone: the input is the user's own extracted
/// text, and escaping ampersands would mangle entity-bearing content the
/// host viewer already displays correctly.
pub fn escape_angle(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Inline Markdown rules, applied in a fixed order.
///
/// Order matters twice: bold must run before italic (or `**x**` is consumed
/// as two italics), and images must run before links (image syntax is a
/// superset prefix of link syntax).
pub struct InlineRules {
    bold: Regex,
    italic_star: Regex,
    italic_underscore: Regex,
    code: Regex,
    image: Regex,
    link: Regex,
}

impl InlineRules {
    /// Compile the inline rule set.
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
            italic_star: Regex::new(r"\*([^*]+)\*").unwrap(),
            italic_underscore: Regex::new(r"_([^_]+)_").unwrap(),
            code: Regex::new(r"`([^`]+)`").unwrap(),
            image: Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
        }
    }

    /// Apply all inline rules to already-escaped text.
    pub fn apply(&self, text: &str) -> String {
        let text = self.bold.replace_all(text, "<strong>$1</strong>");
        let text = self.italic_star.replace_all(&text, "<em>$1</em>");
        let text = self.italic_underscore.replace_all(&text, "<em>$1</em>");
        let text = self.code.replace_all(&text, "<code>$1</code>");
        let text = self
            .image
            .replace_all(&text, r#"<img src="$2" alt="$1">"#);
        let text = self.link.replace_all(&text, r#"<a href="$2">$1</a>"#);
        text.into_owned()
    }
}

impl Default for InlineRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_angle_only() {
        assert_eq!(escape_angle("a < b > c"), "a &lt; b &gt; c");
        // Ampersands pass through untouched.
        assert_eq!(escape_angle("R&D"), "R&D");
    }

    #[test]
    fn test_bold_before_italic() {
        let rules = InlineRules::new();
        assert_eq!(rules.apply("**bold**"), "<strong>bold</strong>");
        assert_eq!(rules.apply("*it*"), "<em>it</em>");
        assert_eq!(rules.apply("_it_"), "<em>it</em>");
        // Without the ordering, italic would swallow the bold markers.
        assert_eq!(
            rules.apply("**bold** and *it*"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_inline_code() {
        let rules = InlineRules::new();
        assert_eq!(rules.apply("use `let` here"), "use <code>let</code> here");
    }

    #[test]
    fn test_image_before_link() {
        let rules = InlineRules::new();
        assert_eq!(
            rules.apply("![logo](pic.png)"),
            r#"<img src="pic.png" alt="logo">"#
        );
        assert_eq!(
            rules.apply("[site](https://example.com)"),
            r#"<a href="https://example.com">site</a>"#
        );
        // A leading ! must not leave a stray bang plus link.
        assert_eq!(
            rules.apply("see ![alt](a.png) and [t](u)"),
            r#"see <img src="a.png" alt="alt"> and <a href="u">t</a>"#
        );
    }
}
