//! Inline formatting within a single line.
//!
//! The line is escaped first, then links, code spans, bold and italic are
//! substituted in that order. Markdown punctuation (`[`, `]`, `(`, `)`,
//! `` ` ``, `*`) survives escaping, so the patterns below can run on the
//! escaped text, and any `<` or `>` typed by the author is already an entity.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;

/// `[label](url)` where the url is `http(s)://` with no whitespace or `)`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").unwrap());

/// Single-backtick code span with non-empty content.
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

const LINK_TEMPLATE: &str =
    r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#;

/// Escape a line and apply inline formatting.
///
/// Each substitution runs over the output of the previous one, so
/// `***a***` becomes `<em><strong>a</strong></em>`. Text that matches no
/// pattern is left as escaped literal text.
///
/// # Examples
///
/// ```
/// use memolite_renderer::format_inline;
///
/// assert_eq!(
///     format_inline("**bold** <b>"),
///     "<strong>bold</strong> &lt;b&gt;"
/// );
/// ```
#[must_use]
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let linked = LINK_RE.replace_all(&escaped, LINK_TEMPLATE);
    let coded = CODE_SPAN_RE.replace_all(&linked, "<code>${1}</code>");
    let bold = BOLD_RE.replace_all(&coded, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&bold, "<em>${1}</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("just words"), "just words");
    }

    #[test]
    fn test_mixed_emphasis_and_code() {
        assert_eq!(
            format_inline("plain **bold** and *italic* and `code`"),
            "plain <strong>bold</strong> and <em>italic</em> and <code>code</code>"
        );
    }

    #[test]
    fn test_https_link() {
        assert_eq!(
            format_inline("see [docs](https://example.com/guide)"),
            r#"see <a href="https://example.com/guide" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn test_link_query_ampersand_is_escaped() {
        assert_eq!(
            format_inline("[q](http://example.com/?a=1&b=2)"),
            r#"<a href="http://example.com/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">q</a>"#
        );
    }

    #[test]
    fn test_link_label_is_formatted() {
        assert_eq!(
            format_inline("[**b**](https://x.y)"),
            r#"<a href="https://x.y" target="_blank" rel="noopener noreferrer"><strong>b</strong></a>"#
        );
    }

    #[test]
    fn test_javascript_link_not_matched() {
        assert_eq!(
            format_inline("[x](javascript:alert(1))"),
            "[x](javascript:alert(1))"
        );
    }

    #[test]
    fn test_link_with_whitespace_in_url_not_matched() {
        assert_eq!(
            format_inline("[x](http://a b)"),
            "[x](http://a b)"
        );
    }

    #[test]
    fn test_link_with_empty_label_not_matched() {
        assert_eq!(format_inline("[](https://x.y)"), "[](https://x.y)");
    }

    #[test]
    fn test_quote_in_url_cannot_break_attribute() {
        assert_eq!(
            format_inline(r#"[x](https://a"onclick="b)"#),
            r#"<a href="https://a&quot;onclick=&quot;b" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_empty_code_span_not_matched() {
        assert_eq!(format_inline("``"), "``");
    }

    #[test]
    fn test_code_span_content_is_escaped() {
        assert_eq!(
            format_inline("`<div>`"),
            "<code>&lt;div&gt;</code>"
        );
    }

    #[test]
    fn test_bold_inside_code_span_still_applies() {
        assert_eq!(
            format_inline("`**x**`"),
            "<code><strong>x</strong></code>"
        );
    }

    #[test]
    fn test_triple_asterisk() {
        assert_eq!(format_inline("***a***"), "<em><strong>a</strong></em>");
    }

    #[test]
    fn test_stray_asterisks() {
        assert_eq!(format_inline("a * b"), "a * b");
        assert_eq!(format_inline("****"), "****");
    }

    #[test]
    fn test_multiple_spans_are_non_greedy() {
        assert_eq!(
            format_inline("*a* and *b*"),
            "<em>a</em> and <em>b</em>"
        );
    }

    #[test]
    fn test_raw_tags_are_escaped() {
        assert_eq!(
            format_inline("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }
}
