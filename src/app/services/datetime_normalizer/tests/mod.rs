//! Tests for the date token normalizer


use crate::app::models::Validity;
use chrono::{TimeZone, Utc};

/// Build an expected `Validity::At` from UTC components
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Validity {
    Validity::At(
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap(),
    )
}
