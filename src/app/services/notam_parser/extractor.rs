//! Field-scanning state machine
//!
//! Lines are consumed once, in order, by a scanner in one of three states:
//!
//! - `Idle`: no field open yet (or only text we cannot attribute)
//! - `InField(tag)`: a `Q)`–`D)` field is open; unmarked lines continue it
//! - `InBody`: free text collection; every later line is body, verbatim
//!
//! Body collection starts at `E)`, at a stray `F)`/`G)`, or, when the text
//! has no `E)` at all, at the first unmarked line after `C)`. Once in the
//! body, markers are no longer interpreted, so `F)`/`G)` inside free text are
//! kept as written.

use super::header::{HeaderInfo, parse_header_line};
use super::markers::{
    has_body_marker, header_field_offset, parse_marker, split_inline_markers, starts_with_marker,
};
use super::text::{clean_text, split_lines, strip_unmatched_closing};
use crate::app::models::{FieldTag, ParsedFields, is_perm_token};
use crate::constants::PERM_TOKEN;
use tracing::{debug, trace};

/// Reasons the extractor gives up on a NOTAM
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// Nothing but whitespace
    #[error("input is empty")]
    EmptyInput,

    /// Neither an aerodrome nor a body could be extracted
    #[error("no structured content found")]
    NoStructuredContent,
}

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    InField(FieldTag),
    InBody,
}

/// Extract ICAO fields from raw NOTAM text
pub fn extract(raw_text: &str) -> Result<ParsedFields, ParseFailure> {
    let text = clean_text(raw_text);
    let lines = split_lines(&text);
    let Some(&first) = lines.first() else {
        return Err(ParseFailure::EmptyInput);
    };

    let mut scanner = FieldScanner::new(has_body_marker(&text));

    // Line 0 is a header unless it already opens a field. A header may be
    // followed on the same line by the first field; markers in other free
    // text on line 0 are not fields.
    let header = if starts_with_marker(first) {
        scanner.feed(first);
        HeaderInfo::default()
    } else {
        let header_text = match header_field_offset(first) {
            Some(offset) => {
                scanner.feed(first[offset..].trim());
                &first[..offset]
            }
            None => first,
        };
        parse_header_line(header_text)
    };

    for line in lines.iter().skip(1) {
        scanner.feed(line);
    }

    let fields = scanner.finish(header);
    if fields.aerodrome.is_empty() && fields.body.is_empty() {
        debug!("No structured content in NOTAM text ({} lines)", lines.len());
        return Err(ParseFailure::NoStructuredContent);
    }

    Ok(fields)
}

/// Single-pass line scanner
struct FieldScanner {
    state: ScanState,
    has_body_marker: bool,
    seen_valid_to: bool,
    buffers: [String; 5],
    body_lines: Vec<String>,
}

impl FieldScanner {
    fn new(has_body_marker: bool) -> Self {
        Self {
            state: ScanState::Idle,
            has_body_marker,
            seen_valid_to: false,
            buffers: Default::default(),
            body_lines: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        if self.state == ScanState::InBody {
            self.body_lines.push(line.to_string());
            return;
        }

        if starts_with_marker(line) {
            for segment in split_inline_markers(line) {
                self.feed_marked(segment);
            }
        } else {
            self.feed_unmarked(line);
        }
    }

    fn feed_marked(&mut self, segment: &str) {
        if self.state == ScanState::InBody {
            self.body_lines.push(segment.to_string());
            return;
        }

        let Some((tag, rest)) = parse_marker(segment) else {
            self.feed_unmarked(segment);
            return;
        };

        match tag {
            FieldTag::E => {
                self.state = ScanState::InBody;
                if !rest.is_empty() {
                    self.body_lines.push(rest.to_string());
                }
            }
            FieldTag::F | FieldTag::G => {
                self.state = ScanState::InBody;
                self.body_lines.push(segment.to_string());
            }
            _ => {
                if let Some(buffer) = self.buffer_mut(tag) {
                    buffer.clear();
                    buffer.push_str(rest);
                }
                if tag == FieldTag::C {
                    self.seen_valid_to = true;
                }
                self.state = ScanState::InField(tag);
            }
        }
    }

    fn feed_unmarked(&mut self, line: &str) {
        if !self.has_body_marker && self.seen_valid_to {
            trace!("Implicit body start at line '{}'", line);
            self.state = ScanState::InBody;
            self.body_lines.push(line.to_string());
            return;
        }

        match self.state {
            ScanState::InField(tag) => {
                if let Some(buffer) = self.buffer_mut(tag) {
                    if !buffer.is_empty() {
                        buffer.push(' ');
                    }
                    buffer.push_str(line);
                }
            }
            ScanState::Idle => trace!("Ignoring unattributed line '{}'", line),
            ScanState::InBody => self.body_lines.push(line.to_string()),
        }
    }

    fn buffer_mut(&mut self, tag: FieldTag) -> Option<&mut String> {
        let index = match tag {
            FieldTag::Q => 0,
            FieldTag::A => 1,
            FieldTag::B => 2,
            FieldTag::C => 3,
            FieldTag::D => 4,
            FieldTag::E | FieldTag::F | FieldTag::G => return None,
        };
        self.buffers.get_mut(index)
    }

    fn finish(self, header: HeaderInfo) -> ParsedFields {
        let [q_line, aerodrome, valid_from_raw, valid_to_raw, schedule] =
            self.buffers.map(|buffer| buffer.trim().to_string());

        let valid_to_raw = if is_perm_token(&valid_to_raw) {
            PERM_TOKEN.to_string()
        } else {
            valid_to_raw
        };

        let body = strip_unmatched_closing(self.body_lines.join("\n").trim());

        ParsedFields {
            notam_number: header.notam_number,
            is_cancellation: header.is_cancellation,
            cancels_notam: header.cancels_notam,
            replaces_notam: header.replaces_notam,
            q_line,
            aerodrome,
            valid_from_raw,
            valid_to_raw,
            schedule,
            body,
        }
    }
}
