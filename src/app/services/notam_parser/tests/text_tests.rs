//! Tests for text cleanup, marker grammar and direct field lookup

use crate::app::models::FieldTag;
use crate::app::services::notam_parser::find_field_token;
use crate::app::services::notam_parser::markers::{
    body_marker_offset, has_body_marker, header_field_offset, honoured_markers, parse_marker,
    split_inline_markers,
};
use crate::app::services::notam_parser::text::{
    clean_text, split_lines, strip_unmatched_closing,
};

#[test]
fn test_clean_text_line_endings_and_escapes() {
    assert_eq!(clean_text("A\r\nB\rC"), "A\nB\nC");
    assert_eq!(clean_text("A\\nB\\r\\nC"), "A\nB\nC");
    assert_eq!(clean_text("RWY \\(WIP\\) \\\"X\\\""), "RWY (WIP) \"X\"");
}

#[test]
fn test_split_lines_drops_blank_lines() {
    let lines = split_lines("  A) KJFK \n\n   \n E) TEXT  ");
    assert_eq!(lines, vec!["A) KJFK", "E) TEXT"]);
}

#[test]
fn test_strip_unmatched_closing() {
    assert_eq!(strip_unmatched_closing("RWY CLSD)"), "RWY CLSD");
    assert_eq!(strip_unmatched_closing("RWY CLSD ) )"), "RWY CLSD");
    assert_eq!(strip_unmatched_closing("RWY CLSD (WIP)"), "RWY CLSD (WIP)");
    assert_eq!(strip_unmatched_closing("(RWY CLSD (WIP))"), "(RWY CLSD (WIP))");
}

#[test]
fn test_parse_marker() {
    assert_eq!(parse_marker("E) RWY CLSD"), Some((FieldTag::E, "RWY CLSD")));
    assert_eq!(parse_marker("Q)KZNY/QMRLC"), Some((FieldTag::Q, "KZNY/QMRLC")));
    assert_eq!(parse_marker("C)"), Some((FieldTag::C, "")));
    assert_eq!(parse_marker("H) NOT A FIELD"), None);
    assert_eq!(parse_marker("RWY 04L"), None);
}

#[test]
fn test_split_inline_markers_in_icao_order() {
    assert_eq!(
        split_inline_markers("A) KJFK B) 2501010000 C) 2501312359 E) RWY 04L/22R CLSD"),
        vec!["A) KJFK", "B) 2501010000", "C) 2501312359", "E) RWY 04L/22R CLSD"]
    );
}

#[test]
fn test_split_inline_markers_stops_at_body() {
    assert_eq!(
        split_inline_markers("E) FUEL (JET A) NOT AVBL B) NOTE"),
        vec!["E) FUEL (JET A) NOT AVBL B) NOTE"]
    );
    assert_eq!(
        split_inline_markers("C) 2501312359 E) TWY A) CLSD F) SFC"),
        vec!["C) 2501312359", "E) TWY A) CLSD F) SFC"]
    );
}

#[test]
fn test_split_inline_markers_ignores_out_of_order_letters() {
    assert_eq!(
        split_inline_markers("B) 2501010000 A) X C) 2501312359"),
        vec!["B) 2501010000 A) X", "C) 2501312359"]
    );
}

#[test]
fn test_has_body_marker() {
    assert!(has_body_marker("A) KJFK\nE) TEXT"));
    assert!(has_body_marker("A) KJFK E) TEXT"));
    assert!(!has_body_marker("A) KJFK\nC) PERM\nTEXT"));
    assert!(!has_body_marker("A) KJFK\nC) PERM\nSEE AIP SUPP E) FOR DETAILS"));
    assert!(!has_body_marker("A) KJFK\nC) PERM\nF) SFC\nE) TEXT"));
}

#[test]
fn test_honoured_markers_positions() {
    let text = "A1234/25 NOTAMN A) KJFK\n  C) PERM E) RWY CLSD\nG) 5000FT";
    assert_eq!(
        honoured_markers(text),
        vec![(16, FieldTag::A), (26, FieldTag::C), (34, FieldTag::E)]
    );
    assert_eq!(body_marker_offset(text), Some(34));
    assert_eq!(body_marker_offset("A) KJFK\nC) PERM\nTEXT"), None);
}

#[test]
fn test_header_field_offset() {
    assert_eq!(header_field_offset("A0400/25 NOTAMN A) KIAD"), Some(16));
    assert_eq!(header_field_offset("(NOTAMC A0001/25 E) X"), Some(17));
    assert_eq!(header_field_offset("RWY 09 CLSD SEE NOTE A) BELOW"), None);
    assert_eq!(header_field_offset("A1234/25 NOTAMN"), None);
}

#[test]
fn test_find_field_token() {
    let raw = "A1235/25 NOTAMC A1234/25\nA) KJFK B) 2501010000 C) 2501312359 E) RWY 04L/22R CLSD";

    assert_eq!(find_field_token(raw, FieldTag::A).as_deref(), Some("KJFK"));
    assert_eq!(find_field_token(raw, FieldTag::B).as_deref(), Some("2501010000"));
    assert_eq!(find_field_token(raw, FieldTag::C).as_deref(), Some("2501312359"));
    assert!(find_field_token(raw, FieldTag::D).is_none());
}

#[test]
fn test_find_field_token_stops_at_line_end() {
    let raw = "A) KJFK\nC) 2501312359 EST\nEST TEXT";
    assert_eq!(find_field_token(raw, FieldTag::C).as_deref(), Some("2501312359 EST"));

    let empty = "A) KJFK\nC)\n2501312359";
    assert!(find_field_token(empty, FieldTag::C).is_none());
}

#[test]
fn test_find_field_token_ignores_body_text() {
    let raw = "A) KJFK B) 2501010000\nE) RWY CLSD UNTIL C) 2503010000";
    assert_eq!(find_field_token(raw, FieldTag::B).as_deref(), Some("2501010000"));
    assert!(find_field_token(raw, FieldTag::C).is_none());
}
