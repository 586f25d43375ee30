//! Direct field lookup in raw NOTAM text
//!
//! The date fallback chain prefers a token read straight out of the raw text
//! over the structurally parsed field: the raw text is the original report,
//! while the parsed field may have picked up wrapped continuation text.

use super::markers::body_marker_offset;
use super::text::clean_text;
use crate::app::models::FieldTag;
use regex::Regex;
use std::sync::OnceLock;

fn field_marker_re() -> &'static Regex {
    static FIELD_MARKER_RE: OnceLock<Regex> = OnceLock::new();
    FIELD_MARKER_RE
        .get_or_init(|| Regex::new(r"(?m)(?:^|\s)([QA-G])\)[ \t]*").expect("valid field regex"))
}

fn next_marker_re() -> &'static Regex {
    static NEXT_MARKER_RE: OnceLock<Regex> = OnceLock::new();
    NEXT_MARKER_RE.get_or_init(|| Regex::new(r"\s[QA-G]\)").expect("valid next marker regex"))
}

/// Find the token for one field in raw text
///
/// Returns the text following the first `X)` marker up to the next marker or
/// the end of that line, trimmed; None when the marker is absent or empty.
/// Markers inside the free-text body are not fields.
pub fn find_field_token(raw_text: &str, tag: FieldTag) -> Option<String> {
    let text = clean_text(raw_text);
    let body_start = body_marker_offset(&text).unwrap_or(text.len());

    let start = field_marker_re()
        .captures_iter(&text)
        .find(|caps| {
            caps.get(1).is_some_and(|m| {
                m.start() <= body_start && m.as_str().chars().next() == Some(tag.as_char())
            })
        })?
        .get(0)?
        .end();

    let rest = &text[start..];
    let line = rest.split('\n').next().unwrap_or_default();
    let token = match next_marker_re().find(line) {
        Some(next) => &line[..next.start()],
        None => line,
    };

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
