//! Tests for the field-scanning state machine

use super::*;
use crate::app::services::notam_parser::{ParseFailure, extract};

#[test]
fn test_extract_packed_cancellation() {
    let fields = extract(FAA_CANCELLATION).unwrap();

    assert_eq!(fields.notam_number.as_deref(), Some("A1235/25"));
    assert!(fields.is_cancellation);
    assert_eq!(fields.cancels_notam.as_deref(), Some("A1234/25"));
    assert_eq!(fields.q_line, "KZNY/QMRLC/IV/M/A/000/999/4038N07347W005");
    assert_eq!(fields.aerodrome, "KJFK");
    assert_eq!(fields.valid_from_raw, "2501010000");
    assert_eq!(fields.valid_to_raw, "2501312359");
    assert_eq!(fields.schedule, "");
    assert_eq!(fields.body, "RWY 04L/22R CLSD");
}

#[test]
fn test_extract_wrapped_notam_strips_closing_paren() {
    let fields = extract(WRAPPED_NOTAM).unwrap();

    assert_eq!(fields.notam_number.as_deref(), Some("A0567/25"));
    assert!(!fields.is_cancellation);
    assert_eq!(fields.aerodrome, "CYYZ");
    assert_eq!(fields.valid_from_raw, "2503011200");
    assert_eq!(fields.valid_to_raw, "2503152359EST");
    assert_eq!(fields.schedule, "DAILY 0400-1000");
    assert_eq!(fields.body, "TWY A BTN TWY B AND TWY C CLSD");
}

#[test]
fn test_extract_normalizes_perm() {
    let fields = extract(PERM_NOTAM).unwrap();
    assert_eq!(fields.valid_to_raw, "PERM");
    assert_eq!(fields.aerodrome, "CYUL");
}

#[test]
fn test_extract_implicit_body_after_valid_to() {
    let fields = extract(NO_BODY_MARKER).unwrap();

    assert_eq!(fields.valid_to_raw, "2504302359");
    assert_eq!(fields.body, "ILS RWY 04R U/S\nF) SFC");
}

#[test]
fn test_extract_unescapes_text() {
    let fields = extract(ESCAPED_NOTAM).unwrap();

    assert_eq!(fields.aerodrome, "KORD");
    assert_eq!(fields.valid_to_raw, "2505022359");
    assert_eq!(fields.body, "FUEL (JET A) NOT AVBL");
}

#[test]
fn test_extract_keeps_stray_markers_in_body() {
    let fields = extract(STRAY_LIMIT_MARKERS).unwrap();

    assert_eq!(fields.q_line, "KZNY/QRTCA/IV/BO/W/000/050/ 4038N07347W010");
    assert_eq!(
        fields.body,
        "TEMPORARY RESTRICTED AREA ACTIVE\nF) SFC\nG) 5000FT AMSL"
    );
}

#[test]
fn test_extract_without_header_line() {
    let fields = extract("A) EGLL B) 2507010600 C) 2507011800\nE) RWY 09L CLSD").unwrap();

    assert!(fields.notam_number.is_none());
    assert_eq!(fields.aerodrome, "EGLL");
    assert_eq!(fields.body, "RWY 09L CLSD");
}

#[test]
fn test_extract_header_followed_by_fields_on_one_line() {
    let fields =
        extract("A0400/25 NOTAMN Q) KZDC/QMRLC/IV/NBO/A/000/999/ A) KIAD B) 2508010000 C) PERM E) RWY 12/30 CLSD")
            .unwrap();

    assert_eq!(fields.notam_number.as_deref(), Some("A0400/25"));
    assert_eq!(fields.q_line, "KZDC/QMRLC/IV/NBO/A/000/999/");
    assert_eq!(fields.aerodrome, "KIAD");
    assert_eq!(fields.valid_to_raw, "PERM");
    assert_eq!(fields.body, "RWY 12/30 CLSD");
}

#[test]
fn test_extract_e_marker_on_its_own_line() {
    let fields = extract("A0500/25 NOTAMN\nA) KSEA\nE)\nOBST CRANE 250FT AGL\nLGTD").unwrap();
    assert_eq!(fields.body, "OBST CRANE 250FT AGL\nLGTD");
}

#[test]
fn test_extract_continuation_lines_append_to_open_field() {
    let fields = extract("A0600/25 NOTAMN\nA) KDEN\nB) 2509010000\nC) 2509302359\nD) MON-FRI\n0600-1400\nE) TWY F CLSD").unwrap();
    assert_eq!(fields.schedule, "MON-FRI 0600-1400");
}

#[test]
fn test_extract_later_marker_overwrites_field() {
    let fields = extract("A0700/25 NOTAMN\nA) KLAX\nA) KSFO\nE) TEXT").unwrap();
    assert_eq!(fields.aerodrome, "KSFO");
}

#[test]
fn test_extract_balanced_parentheses_are_kept() {
    let fields = extract("A) KPHX\nE) RWY 08 CLSD (WIP)").unwrap();
    assert_eq!(fields.body, "RWY 08 CLSD (WIP)");
}

#[test]
fn test_extract_failure_without_aerodrome_or_body() {
    assert_eq!(
        extract("A0800/25 NOTAMN\nB) 2501010000"),
        Err(ParseFailure::NoStructuredContent)
    );
    assert_eq!(
        extract("!JFK 01/001 JFK RWY 4L/22R CLSD 2501010000-2501312359"),
        Err(ParseFailure::NoStructuredContent)
    );
}

#[test]
fn test_extract_mid_sentence_e_is_not_a_marker() {
    let fields = extract(
        "A1234/25 NOTAMN\nA) KJFK B) 2501010000 C) 2501312359\nRWY 04L CLSD SEE AIP SUPP E) FOR DETAILS",
    )
    .unwrap();

    assert_eq!(fields.valid_to_raw, "2501312359");
    assert_eq!(fields.body, "RWY 04L CLSD SEE AIP SUPP E) FOR DETAILS");
}

#[test]
fn test_extract_free_text_first_line_opens_no_field() {
    assert_eq!(
        extract("RWY 09 CLSD SEE NOTE A) BELOW"),
        Err(ParseFailure::NoStructuredContent)
    );

    let fields = extract("(NOTAMN A) KBOS B) 2501010000 E) TWY K CLSD").unwrap();
    assert_eq!(fields.aerodrome, "KBOS");
    assert_eq!(fields.body, "TWY K CLSD");
}

#[test]
fn test_extract_failure_on_empty_input() {
    assert_eq!(extract(""), Err(ParseFailure::EmptyInput));
    assert_eq!(extract("  \n \\n  "), Err(ParseFailure::EmptyInput));
}

#[test]
fn test_extract_is_idempotent_over_reconstruction() {
    for fixture in [
        FAA_CANCELLATION,
        WRAPPED_NOTAM,
        PERM_NOTAM,
        NO_BODY_MARKER,
        ESCAPED_NOTAM,
        STRAY_LIMIT_MARKERS,
    ] {
        let first = extract(fixture).unwrap();
        let second = extract(&first.to_icao_text()).unwrap();
        assert_eq!(first, second, "reconstruction of {:?}", fixture);
    }
}

#[test]
fn test_reconstruction_of_cancellation() {
    let fields = extract(FAA_CANCELLATION).unwrap();
    let text = fields.to_icao_text();

    assert!(text.starts_with("A1235/25 NOTAMC A1234/25\n"));
    assert!(text.contains("\nA) KJFK\n"));
    assert!(text.ends_with("E) RWY 04L/22R CLSD"));
}
