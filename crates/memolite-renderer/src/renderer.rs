//! Line-oriented block renderer.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::inline::format_inline;
use crate::rules::{LineKind, classify_line};

/// Block-level state while walking the lines of one document.
///
/// A list and a code block are never open at the same time: opening a code
/// block closes the list first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum BlockState {
    #[default]
    Normal,
    InList,
    InCode,
}

/// Single-use HTML writer for one document.
struct BlockRenderer {
    output: String,
    state: BlockState,
}

impl BlockRenderer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            state: BlockState::Normal,
        }
    }

    fn line(&mut self, line: &str) {
        match classify_line(line, self.state == BlockState::InCode) {
            LineKind::Fence => self.fence(),
            LineKind::Code(text) => {
                self.output.push_str(&escape_html(text));
                self.output.push('\n');
            }
            LineKind::ListItem(text) => {
                if self.state != BlockState::InList {
                    self.output.push_str("<ul>");
                    self.state = BlockState::InList;
                }
                write!(self.output, "<li>{}</li>", format_inline(text)).unwrap();
            }
            LineKind::Heading { level, text } => {
                self.close_list();
                write!(self.output, "<h{level}>{}</h{level}>", format_inline(text)).unwrap();
            }
            LineKind::Blank => {
                self.close_list();
                self.output.push_str("<br>");
            }
            LineKind::Paragraph(text) => {
                self.close_list();
                write!(self.output, "<p>{}</p>", format_inline(text)).unwrap();
            }
        }
    }

    fn fence(&mut self) {
        if self.state == BlockState::InCode {
            self.output.push_str("</code></pre>");
            self.state = BlockState::Normal;
        } else {
            self.close_list();
            self.output.push_str("<pre><code>");
            self.state = BlockState::InCode;
        }
    }

    fn close_list(&mut self) {
        if self.state == BlockState::InList {
            self.output.push_str("</ul>");
            self.state = BlockState::Normal;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        if self.state == BlockState::InCode {
            tracing::debug!("Closing unterminated code fence at end of input");
            self.output.push_str("</code></pre>");
        }
        self.output
    }
}

/// Render memo markdown to HTML.
///
/// Accepts `&str` or `Option<&str>`; absent and empty input both render to an
/// empty string. `\r\n` line endings are treated as `\n`. Rendering never
/// fails: unterminated fences are closed at end of input and unmatched inline
/// syntax is left as escaped text.
///
/// Supported syntax, one line at a time:
/// - fenced code blocks (```` ``` ````), content escaped but not formatted
/// - `-`, `*`, `+` unordered list items
/// - `#` to `######` headings
/// - blank lines, each rendered as a single `<br>`
/// - everything else as a `<p>` paragraph
///
/// # Examples
///
/// ```
/// use memolite_renderer::render_markdown;
///
/// assert_eq!(render_markdown("# Title"), "<h1>Title</h1>");
/// assert_eq!(render_markdown("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(render_markdown(None), "");
/// ```
#[must_use]
pub fn render_markdown<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let normalized = text.replace("\r\n", "\n");
    let mut renderer = BlockRenderer::with_capacity(normalized.len() + normalized.len() / 2);
    let mut line_count = 0usize;
    for line in normalized.split('\n') {
        renderer.line(line);
        line_count += 1;
    }
    let html = renderer.finish();

    tracing::trace!(lines = line_count, html_len = html.len(), "Rendered markdown");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_absent_input() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown(None::<&str>), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render_markdown("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_heading_level_three_with_inline() {
        assert_eq!(
            render_markdown("### Use `cargo`"),
            "<h3>Use <code>cargo</code></h3>"
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(
            render_markdown("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_mixed_markers_share_container() {
        assert_eq!(
            render_markdown("- a\n* b\n+ c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_list_closed_by_paragraph() {
        assert_eq!(
            render_markdown("- a\nafter"),
            "<ul><li>a</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_list_closed_by_heading() {
        assert_eq!(
            render_markdown("- a\n## Next"),
            "<ul><li>a</li></ul><h2>Next</h2>"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            render_markdown("- a\n\n- b"),
            "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_inline_paragraph() {
        assert_eq!(
            render_markdown("plain **bold** and *italic* and `code`"),
            "<p>plain <strong>bold</strong> and <em>italic</em> and <code>code</code></p>"
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            render_markdown("```\nline1\nline2\n```"),
            "<pre><code>line1\nline2\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_is_escaped_not_formatted() {
        assert_eq!(
            render_markdown("```html\n<b>**x**</b>\n  - keep\n```"),
            "<pre><code>&lt;b&gt;**x**&lt;/b&gt;\n  - keep\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_keeps_blank_lines() {
        assert_eq!(
            render_markdown("```\na\n\nb\n```"),
            "<pre><code>a\n\nb\n</code></pre>"
        );
    }

    #[test]
    fn test_fence_closes_open_list() {
        assert_eq!(
            render_markdown("- a\n```\nx\n```"),
            "<ul><li>a</li></ul><pre><code>x\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_is_force_closed() {
        assert_eq!(
            render_markdown("```\ncode"),
            "<pre><code>code\n</code></pre>"
        );
    }

    #[test]
    fn test_lone_fence() {
        assert_eq!(render_markdown("```"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_javascript_link_stays_literal() {
        assert_eq!(
            render_markdown("[x](javascript:alert(1))"),
            "<p>[x](javascript:alert(1))</p>"
        );
    }

    #[test]
    fn test_blank_line_becomes_break() {
        assert_eq!(render_markdown("a\n\nb"), "<p>a</p><br><p>b</p>");
    }

    #[test]
    fn test_each_blank_line_is_one_break() {
        assert_eq!(render_markdown("a\n\n\nb"), "<p>a</p><br><br><p>b</p>");
    }

    #[test]
    fn test_trailing_newline_renders_break() {
        assert_eq!(render_markdown("a\n"), "<p>a</p><br>");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(render_markdown("   "), "<br>");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            render_markdown("# T\r\n- a\r\n```\r\nx\r\n```"),
            "<h1>T</h1><ul><li>a</li></ul><pre><code>x\n</code></pre>"
        );
    }

    #[test]
    fn test_leading_byte_order_mark() {
        assert_eq!(
            render_markdown("\u{feff}```\ncode\n```\n# After"),
            "<pre><code>code\n</code></pre><h1>After</h1>"
        );
        assert_eq!(render_markdown("\u{feff}- a"), "<ul><li>a</li></ul>");
    }

    #[test]
    fn test_heading_with_carriage_return_is_paragraph() {
        assert_eq!(render_markdown("## a\rb"), "<p>## a\rb</p>");
    }

    #[test]
    fn test_script_is_escaped() {
        assert_eq!(
            render_markdown("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_existing_entities_escaped_once() {
        assert_eq!(render_markdown("&amp; &lt;"), "<p>&amp;amp; &amp;lt;</p>");
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "# Groceries\n- **milk**\n- [shop](https://example.com)\n\nDone *today*";
        assert_eq!(
            render_markdown(markdown),
            concat!(
                "<h1>Groceries</h1>",
                "<ul><li><strong>milk</strong></li>",
                r#"<li><a href="https://example.com" target="_blank" rel="noopener noreferrer">shop</a></li></ul>"#,
                "<br>",
                "<p>Done <em>today</em></p>"
            )
        );
    }
}
