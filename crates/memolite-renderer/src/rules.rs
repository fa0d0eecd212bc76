//! Line classification rule table.
//!
//! Each rule inspects one raw line (and whether a code block is open) and
//! either claims it or passes. Rules are tried in table order; a line no rule
//! claims is a paragraph.

use std::sync::LazyLock;

use regex::Regex;

/// List item marker: optional indent, one of `-`, `*`, `+`, then whitespace.
///
/// A byte-order mark counts as whitespace throughout this module.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\x{FEFF}]*[-*+][\s\x{FEFF}]+").unwrap());

/// ATX heading: one to six `#`, whitespace, then the heading text.
///
/// The text never spans a `\r` or a Unicode line or paragraph separator; a line
/// holding one is a paragraph.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})[\s\x{FEFF}]+([^\r\x{2028}\x{2029}]*)$").unwrap()
});

const FENCE: &str = "```";

const BOM: char = '\u{feff}';

fn trim_space(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// How a single line is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Code fence; opens or closes a code block and is never rendered.
    Fence,
    /// Line inside an open code block, kept verbatim.
    Code(&'a str),
    /// Unordered list item with the marker stripped.
    ListItem(&'a str),
    /// Heading of the given level (1-6).
    Heading {
        /// Number of leading `#` characters.
        level: usize,
        /// Text after the marker.
        text: &'a str,
    },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else.
    Paragraph(&'a str),
}

/// A named classifier in the rule table.
struct Rule {
    name: &'static str,
    classify: fn(&str, bool) -> Option<LineKind<'_>>,
}

/// Rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        name: "fence",
        classify: fence,
    },
    Rule {
        name: "code",
        classify: code,
    },
    Rule {
        name: "list_item",
        classify: list_item,
    },
    Rule {
        name: "heading",
        classify: heading,
    },
    Rule {
        name: "blank",
        classify: blank,
    },
];

/// Classify a line.
///
/// `in_code` is whether a fenced code block is currently open. Falls back to
/// [`LineKind::Paragraph`] when no rule matches.
///
/// # Examples
///
/// ```
/// use memolite_renderer::{LineKind, classify_line};
///
/// assert_eq!(classify_line("## Plan", false), LineKind::Heading { level: 2, text: "Plan" });
/// assert_eq!(classify_line("## Plan", true), LineKind::Code("## Plan"));
/// ```
#[must_use]
pub fn classify_line(line: &str, in_code: bool) -> LineKind<'_> {
    for rule in RULES {
        if let Some(kind) = (rule.classify)(line, in_code) {
            tracing::trace!(rule = rule.name, "Classified line");
            return kind;
        }
    }
    LineKind::Paragraph(line)
}

fn fence(line: &str, _in_code: bool) -> Option<LineKind<'_>> {
    trim_space(line).starts_with(FENCE).then_some(LineKind::Fence)
}

fn code(line: &str, in_code: bool) -> Option<LineKind<'_>> {
    in_code.then_some(LineKind::Code(line))
}

fn list_item(line: &str, _in_code: bool) -> Option<LineKind<'_>> {
    LIST_ITEM_RE
        .find(line)
        .map(|marker| LineKind::ListItem(&line[marker.end()..]))
}

fn heading(line: &str, _in_code: bool) -> Option<LineKind<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some(LineKind::Heading { level, text })
}

fn blank(line: &str, _in_code: bool) -> Option<LineKind<'_>> {
    trim_space(line).is_empty().then_some(LineKind::Blank)
}
