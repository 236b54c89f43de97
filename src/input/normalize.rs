//! Cleanup for text copied out of web pages

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Replace markup tags with spaces and collapse whitespace runs
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let without_tags = TAG_PATTERN.replace_all(text, " ");
    WHITESPACE_PATTERN
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        let html = "<div><h1>Senior Engineer</h1>\n\n<p>Rust &amp; Go</p></div>";
        assert_eq!(clean_text(html), "Senior Engineer Rust &amp; Go");
    }

    #[test]
    fn test_empty_and_plain() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  plain\ttext  "), "plain text");
    }
}
