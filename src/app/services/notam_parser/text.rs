//! Text cleanup applied before field extraction
//!
//! Upstream APIs hand NOTAM text over with inconsistent line endings and, when
//! the text has been through a JSON or HTML layer twice, with escape sequences
//! left in literally. Both are normalized here.

/// Literal escape sequences and their replacements, longest first
const ESCAPES: &[(&str, &str)] = &[
    ("\\r\\n", "\n"),
    ("\\n", "\n"),
    ("\\r", "\n"),
    ("\\t", "\t"),
    ("\\(", "("),
    ("\\)", ")"),
    ("\\\"", "\""),
    ("\\'", "'"),
];

/// Normalize line endings and unescape common escape sequences
pub fn clean_text(raw: &str) -> String {
    let mut text = raw.replace("\r\n", "\n").replace('\r', "\n");
    for (escaped, replacement) in ESCAPES {
        if text.contains(escaped) {
            text = text.replace(escaped, replacement);
        }
    }
    text
}

/// Split cleaned text into non-empty, trimmed lines
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Remove trailing `)` characters that have no matching `(`
///
/// ICAO messages are wrapped as `(A1234/25 NOTAMN ... )`; the closing
/// parenthesis ends up glued to the last body line.
pub fn strip_unmatched_closing(text: &str) -> String {
    let mut result = text.trim_end().to_string();
    while result.ends_with(')') && count(&result, ')') > count(&result, '(') {
        result.pop();
        result = result.trim_end().to_string();
    }
    result
}

fn count(text: &str, needle: char) -> usize {
    text.chars().filter(|c| *c == needle).count()
}
