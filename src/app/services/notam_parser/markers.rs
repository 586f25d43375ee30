//! Field marker grammar
//!
//! A field marker is a single ICAO letter followed by `)` at the start of a
//! line (`E) RWY 04L CLSD`). FAA text frequently packs several fields on one
//! line (`A) KJFK B) 2501010000 C) 2501312359`), so inline markers that
//! follow in ICAO order are split out as well.

use super::header::is_header_text;
use crate::app::models::FieldTag;
use regex::Regex;
use std::sync::OnceLock;

fn leading_marker_re() -> &'static Regex {
    static LEADING_MARKER_RE: OnceLock<Regex> = OnceLock::new();
    LEADING_MARKER_RE
        .get_or_init(|| Regex::new(r"^([QA-G])\)\s*(.*)$").expect("valid leading marker regex"))
}

fn any_marker_re() -> &'static Regex {
    static ANY_MARKER_RE: OnceLock<Regex> = OnceLock::new();
    ANY_MARKER_RE.get_or_init(|| Regex::new(r"(?:^|\s)([QA-G])\)").expect("valid marker regex"))
}

/// Split a line into its leading marker and trailing text
pub fn parse_marker(line: &str) -> Option<(FieldTag, &str)> {
    let caps = leading_marker_re().captures(line)?;
    let tag = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(FieldTag::from_char)?;
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((tag, rest))
}

/// Whether the line starts with a field marker
pub fn starts_with_marker(line: &str) -> bool {
    parse_marker(line).is_some()
}

/// Whether the scanner will meet an explicit `E)` marker
///
/// An `E)` inside free text does not count; only markers at the start of a
/// line or of an inline segment do.
pub fn has_body_marker(text: &str) -> bool {
    honoured_markers(text)
        .last()
        .is_some_and(|(_, tag)| *tag == FieldTag::E)
}

/// Byte offset in `text` where body collection starts at an explicit marker
pub fn body_marker_offset(text: &str) -> Option<usize> {
    honoured_markers(text)
        .last()
        .filter(|(_, tag)| tag.starts_body())
        .map(|(offset, _)| *offset)
}

/// Byte offset of the first marker preceded by whitespace or line start
pub fn first_marker_offset(line: &str) -> Option<usize> {
    any_marker_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.start())
}

/// Offset of the first field on a header line, if line 0 is a header
///
/// Text before the marker must carry a NOTAM number or message type;
/// otherwise a mid-sentence `A)` would open a field.
pub fn header_field_offset(line: &str) -> Option<usize> {
    first_marker_offset(line).filter(|offset| is_header_text(&line[..*offset]))
}

/// Markers the field scanner acts on, as (byte offset in text, tag)
///
/// The list ends at the first body marker, since later lines are free text.
pub fn honoured_markers(text: &str) -> Vec<(usize, FieldTag)> {
    let mut markers = Vec::new();
    let mut line_start = 0;
    let mut first_line = true;

    for line in text.split('\n') {
        let offset = line_start;
        line_start += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let indent = line.len() - line.trim_start().len();
        let is_first = std::mem::replace(&mut first_line, false);

        let start = if starts_with_marker(trimmed) {
            Some(0)
        } else if is_first {
            header_field_offset(trimmed)
        } else {
            None
        };
        let Some(start) = start else {
            continue;
        };

        for (cut, tag) in marker_cuts(&trimmed[start..]) {
            markers.push((offset + indent + start + cut, tag));
            if tag.starts_body() {
                return markers;
            }
        }
    }

    markers
}

/// Marker positions that split a line opening with a marker
fn marker_cuts(line: &str) -> Vec<(usize, FieldTag)> {
    let mut cuts = Vec::new();
    let mut last: Option<FieldTag> = None;

    for caps in any_marker_re().captures_iter(line) {
        let Some(letter) = caps.get(1) else {
            continue;
        };
        let Some(tag) = letter.as_str().chars().next().and_then(FieldTag::from_char) else {
            continue;
        };

        match last {
            None if letter.start() == 0 => {}
            None => return Vec::new(),
            Some(previous) if tag <= previous => continue,
            Some(_) => {}
        }

        cuts.push((letter.start(), tag));
        last = Some(tag);
        if tag.starts_body() {
            break;
        }
    }

    cuts
}

/// Split a line that starts with a marker before each later inline marker
///
/// Only markers that advance in ICAO order (Q, A, B, C, D, E, F, G) split the
/// line; anything else stays as field text. Splitting stops at the first
/// body marker, since everything after it is free text.
pub fn split_inline_markers(line: &str) -> Vec<&str> {
    let cuts = marker_cuts(line);
    if cuts.len() <= 1 {
        return vec![line];
    }

    let mut segments = Vec::with_capacity(cuts.len());
    for (index, (start, _)) in cuts.iter().enumerate() {
        let end = cuts.get(index + 1).map_or(line.len(), |(next, _)| *next);
        let segment = line[*start..end].trim();
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
    segments
}
