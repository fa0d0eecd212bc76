//! Lightweight markdown renderer for memo content.
//!
//! Converts a small, predictable markdown subset to HTML in one pass over the
//! lines of the input. All memo text is HTML-escaped before it reaches the
//! output, so rendered memos can be injected into a page as-is.
//!
//! # Supported syntax
//!
//! - Headings (`#` to `######`)
//! - Unordered lists (`-`, `*`, `+`), one level only
//! - Fenced code blocks (```` ``` ````)
//! - Inline `code`, `**bold**`, `*italic*` and `[links](https://...)`
//! - Blank lines, each rendered as one `<br>`
//!
//! Ordered or nested lists, tables, blockquotes and raw HTML are not
//! supported; such input renders as escaped paragraph text.
//!
//! # Example
//!
//! ```
//! use memolite_renderer::{DisplayMode, render_markdown, render_memo};
//!
//! let html = render_markdown("# Notes\n- buy **milk**");
//! assert_eq!(html, "<h1>Notes</h1><ul><li>buy <strong>milk</strong></li></ul>");
//!
//! let plain = render_memo("a\nb", DisplayMode::PlainText);
//! assert_eq!(plain, "a<br>b");
//! ```

mod display;
mod escape;
mod inline;
mod renderer;
mod rules;

pub use display::{DecodeError, DisplayMode, decode_raw, render_memo, render_plain_text};
pub use escape::escape_html;
pub use inline::format_inline;
pub use renderer::render_markdown;
pub use rules::{LineKind, classify_line};
