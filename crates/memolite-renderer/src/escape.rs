//! HTML escaping.
//!
//! Every fragment of memo text that reaches rendered output goes through
//! [`escape_html`], including the contents of fenced code blocks.

/// Escape the five HTML-significant characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#39;`. All other characters are copied unchanged. The input is scanned
/// once, so entities produced here are never escaped a second time.
///
/// # Examples
///
/// ```
/// use memolite_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
