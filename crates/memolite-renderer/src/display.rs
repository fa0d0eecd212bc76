//! Memo display: choosing between markdown and plain-text rendering.
//!
//! The display mode is an explicit argument. Callers decide it from their own
//! configuration; nothing here remembers it between calls.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::escape::escape_html;
use crate::renderer::render_markdown;

/// How memo text is turned into HTML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DisplayMode {
    /// Render with [`render_markdown`].
    Markdown,
    /// Escape the text and turn line breaks into `<br>`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "plain"))]
    PlainText,
}

impl DisplayMode {
    /// Map a "markdown enabled" toggle to a display mode.
    #[must_use]
    pub fn from_enabled(markdown_enabled: bool) -> Self {
        if markdown_enabled {
            Self::Markdown
        } else {
            Self::PlainText
        }
    }

    /// Whether this mode renders markdown.
    #[must_use]
    pub fn is_markdown(self) -> bool {
        self == Self::Markdown
    }
}

/// Error decoding a URI-component-encoded memo.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The percent-decoded bytes are not UTF-8.
    #[error("Encoded memo text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Render memo text in the given display mode.
///
/// # Examples
///
/// ```
/// use memolite_renderer::{DisplayMode, render_memo};
///
/// assert_eq!(render_memo("**a**\nb", DisplayMode::Markdown), "<p><strong>a</strong></p><p>b</p>");
/// assert_eq!(render_memo("**a**\nb", DisplayMode::PlainText), "**a**<br>b");
/// ```
#[must_use]
pub fn render_memo<'a>(text: impl Into<Option<&'a str>>, mode: DisplayMode) -> String {
    let text = text.into();
    tracing::debug!(
        mode = ?mode,
        len = text.map_or(0, str::len),
        "Rendering memo"
    );
    match mode {
        DisplayMode::Markdown => render_markdown(text),
        DisplayMode::PlainText => text.map(render_plain_text).unwrap_or_default(),
    }
}

/// Render memo text without markdown: escaped, with each line break as `<br>`.
#[must_use]
pub fn render_plain_text(text: &str) -> String {
    let normalized = if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    };
    escape_html(&normalized).replace('\n', "<br>")
}

/// Decode memo text stored URI-component-encoded (e.g. in a `data-raw`
/// attribute).
///
/// `+` is kept as-is and malformed `%` escapes are left literal.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn decode_raw(encoded: &str) -> Result<String, DecodeError> {
    let decoded = percent_decode_str(encoded).decode_utf8()?;
    Ok(decoded.into_owned())
}
