//! Tests for the NOTAM record processor module
//!
//! This module provides unit and integration tests for all record processing components.


// Test helper functions and fixtures
use crate::app::models::{Classification, NormalizedNotam, NotamInput, Source, Validity};
use chrono::{DateTime, TimeZone, Utc};

/// Cancellation with every field packed onto one line
pub const CANCELLATION_NOTAM: &str = "A1235/25 NOTAMC A1234/25\n\
Q) KZNY/QMRLC/IV/M/A/000/999/4038N07347W005\n\
A) KJFK B) 2501010000 C) 2501312359 E) RWY 04L/22R CLSD";

/// The NOTAM cancelled by [`CANCELLATION_NOTAM`]
pub const CANCELLED_TARGET: &str = "A1234/25 NOTAMN\n\
Q) KZNY/QMRLC/IV/NBO/A/000/999/4038N07347W005\n\
A) KJFK B) 2412150000 C) 2502282359\n\
E) RWY 04L/22R CLSD";

/// Canadian NOTAM with a local-time end and a permanent sibling
pub const LOCAL_TIME_NOTAM: &str = "A0567/25 NOTAMN\n\
Q) CZYZ/QMXLC/IV/M/A/000/999/4341N07937W005\n\
A) CYYZ\n\
B) 2503011200\n\
C) 2503152359EST\n\
E) TWY A BTN TWY B AND TWY C CLSD";

/// Impossible calendar date in the `C)` field
pub const FEB_30_NOTAM: &str = "A0777/25 NOTAMN\n\
A) KBOS B) 2502011200 C) 2502301200\n\
E) RWY 15R/33L CLSD";

/// FAA domestic-format text with no ICAO fields
pub const DOMESTIC_NOTAM: &str = "!JFK 01/001 JFK RWY 4L/22R CLSD 2501010000-2501312359";

/// Build an FAA input from raw text
pub fn faa(raw_text: &str) -> NotamInput {
    NotamInput::new(raw_text, Source::Faa)
}

/// Build a UTC instant
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// Build a normalized record directly, for merge and stats tests
pub fn create_test_record(
    id: &str,
    valid_from: Option<DateTime<Utc>>,
    valid_to: Option<Validity>,
) -> NormalizedNotam {
    NormalizedNotam {
        id: id.to_string(),
        notam_number: Some(id.to_string()),
        valid_from,
        valid_to,
        valid_from_source: None,
        valid_to_source: None,
        classification: Classification::Other,
        source: Source::Faa,
        is_cancellation: false,
        cancels_notam: None,
        fields: None,
        quality: Vec::new(),
        raw_text: format!("{} NOTAMN", id),
    }
}

/// Build a cancellation record naming `cancels`
pub fn create_cancellation_record(id: &str, cancels: &str) -> NormalizedNotam {
    NormalizedNotam {
        is_cancellation: true,
        cancels_notam: Some(cancels.to_string()),
        classification: Classification::Cancelled,
        ..create_test_record(id, Some(utc(2025, 1, 1, 0, 0)), None)
    }
}
