//! Tests for NOTAM classification

use super::rules::{ClassificationFlags, is_cancellation_type};
use super::{classify, classify_record, combined_text};
use crate::app::models::Classification;
use crate::app::services::notam_parser::extract;

#[test]
fn test_cancellation_outranks_runway() {
    assert_eq!(
        classify("RWY 09 CLSD CANCELLED", None),
        Classification::Cancelled
    );
    assert_eq!(classify("RWY 09 CLSD", Some("C")), Classification::Cancelled);
    assert_eq!(classify("A0001/25 NOTAMC A0000/25 RWY 09 CLSD", None), Classification::Cancelled);
    assert_eq!(classify("TWY A CNL", None), Classification::Cancelled);
}

#[test]
fn test_navaid_family() {
    assert_eq!(classify("ILS RWY 04R U/S", None), Classification::Navaid);
    assert_eq!(classify("RWY 22 LOC OTS", None), Classification::Navaid);
    assert_eq!(classify("JFK VOR/DME U/S", None), Classification::Navaid);
    assert_eq!(classify("RNAV (GPS) RWY 13 AMDT 2", None), Classification::Navaid);
    assert_eq!(classify("RWY 31 PAPI U/S", None), Classification::Navaid);
    assert_eq!(classify("RWY 04 MALSR OTS", None), Classification::Navaid);
    assert_eq!(classify("WAAS LPV MINIMA NOT AVBL", None), Classification::Navaid);
    assert_eq!(classify("glide path rwy 06 u/s", None), Classification::Navaid);
}

#[test]
fn test_surface_and_friction_codes() {
    assert_eq!(classify("RWY 06L RSC 5/5/5 100 PCT DRY", None), Classification::SurfaceCondition);
    assert_eq!(classify("RWY 06L CRFI .45 -3C", None), Classification::FrictionIndex);
    assert_eq!(classify("RWY 06L RSC WET CRFI .45", None), Classification::SurfaceCondition);
}

#[test]
fn test_runway_taxiway_fuel_order() {
    assert_eq!(classify("RWY 04L/22R CLSD", None), Classification::Runway);
    assert_eq!(classify("TWY B CLSD BTN RWY 04 AND TWY C", None), Classification::Runway);
    assert_eq!(classify("TWY B CLSD", None), Classification::Taxiway);
    assert_eq!(classify("FUEL NOT AVBL TWY A", None), Classification::Taxiway);
    assert_eq!(classify("JET A1 NOT AVBL", None), Classification::Fuel);
    assert_eq!(classify("100LL SELF SERVE U/S", None), Classification::Fuel);
}

#[test]
fn test_word_boundaries() {
    // Substrings of longer words must not fire
    assert_eq!(classify("GLOCK RALSTON INSTALLATION", None), Classification::Other);
    assert_eq!(classify("CRANE 250FT AGL", None), Classification::Other);
}

#[test]
fn test_other_when_no_flags() {
    assert_eq!(classify("AERODROME HOURS OF OPS CHANGED", None), Classification::Other);
    assert_eq!(classify("", None), Classification::Other);
}

#[test]
fn test_cancellation_type_codes() {
    assert!(is_cancellation_type(Some("C")));
    assert!(is_cancellation_type(Some(" c ")));
    assert!(is_cancellation_type(Some("Cancelled")));
    assert!(!is_cancellation_type(Some("N")));
    assert!(!is_cancellation_type(None));
}

#[test]
fn test_flags_resolve_priority() {
    let flags = ClassificationFlags {
        runway: true,
        fuel: true,
        taxiway: true,
        ..Default::default()
    };
    assert_eq!(flags.resolve(), Some(Classification::Runway));
    assert_eq!(ClassificationFlags::default().resolve(), None);
}

#[test]
fn test_q_code_fallback() {
    let fields = extract(
        "A0900/25 NOTAMN\nQ) KZNY/QMXLC/IV/M/A/000/999/\nA) KJFK B) 2501010000 C) 2501312359\nE) SEGMENT BRAVO CLOSED",
    )
    .unwrap();

    let raw = fields.to_icao_text();
    assert_eq!(
        classify_record(Some(&fields), &raw, None),
        Classification::Taxiway
    );
}

#[test]
fn test_keywords_win_over_q_code() {
    let fields = extract(
        "A0901/25 NOTAMN\nQ) KZNY/QMXLC/IV/M/A/000/999/\nA) KJFK B) 2501010000 C) 2501312359\nE) ILS RWY 04R U/S",
    )
    .unwrap();

    let raw = fields.to_icao_text();
    assert_eq!(classify_record(Some(&fields), &raw, None), Classification::Navaid);
}

#[test]
fn test_classify_record_without_fields() {
    assert_eq!(
        classify_record(None, "!JFK 01/001 JFK RWY 4L/22R CLSD", None),
        Classification::Runway
    );
}

#[test]
fn test_combined_text_is_uppercased_once() {
    assert_eq!(combined_text("rwy closed", "raw"), "RWY CLOSED RAW");
}
