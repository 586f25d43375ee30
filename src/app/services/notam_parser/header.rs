//! NOTAM header line parsing
//!
//! The first line of an ICAO NOTAM carries the series/number/year token and
//! the message type: `A1235/25 NOTAMC A1234/25`. Number and type are detected
//! independently, since a NOTAM can carry a number without being a
//! cancellation and a cancellation can arrive without its own number.

use regex::Regex;
use std::sync::OnceLock;

fn number_re() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(r"\b([A-Z]\d{4}/\d{2})\b").expect("valid number regex"))
}

fn kind_re() -> &'static Regex {
    static KIND_RE: OnceLock<Regex> = OnceLock::new();
    KIND_RE.get_or_init(|| {
        Regex::new(r"\bNOTAM([NRC])\b(?:\s+([A-Z]\d{4}/\d{2})\b)?").expect("valid kind regex")
    })
}

/// Number and message-type information from the header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub notam_number: Option<String>,
    pub is_cancellation: bool,
    pub cancels_notam: Option<String>,
    pub replaces_notam: Option<String>,
}

/// Parse the header line of a NOTAM
pub fn parse_header_line(line: &str) -> HeaderInfo {
    let line = line.trim().trim_start_matches('(').to_ascii_uppercase();
    let mut header = HeaderInfo::default();

    let kind = kind_re().captures(&line);
    let kind_start = kind
        .as_ref()
        .and_then(|caps| caps.get(0))
        .map_or(line.len(), |m| m.start());

    header.notam_number = number_re()
        .captures_iter(&line)
        .filter_map(|caps| caps.get(1))
        .find(|m| m.start() < kind_start)
        .map(|m| m.as_str().to_string());

    if let Some(caps) = kind {
        let reference = caps.get(2).map(|m| m.as_str().to_string());
        match caps.get(1).map(|m| m.as_str()) {
            Some("C") if reference.is_some() => {
                header.is_cancellation = true;
                header.cancels_notam = reference;
            }
            Some("R") => header.replaces_notam = reference,
            _ => {}
        }
    }

    header
}

/// Whether a token is a well-formed NOTAM number
pub fn is_notam_number(token: &str) -> bool {
    number_re()
        .find(token.trim())
        .is_some_and(|m| m.start() == 0 && m.end() == token.trim().len())
}

/// Whether text reads as a header: a NOTAM number or a message-type keyword
pub fn is_header_text(text: &str) -> bool {
    let text = text.trim().trim_start_matches('(').to_ascii_uppercase();
    number_re().is_match(&text) || kind_re().is_match(&text)
}
