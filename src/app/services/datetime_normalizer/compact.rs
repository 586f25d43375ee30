//! Compact `YYMMDDHHMM[TZ]` token parsing

use super::DateOutcome;
use crate::app::models::Validity;
use crate::constants::timezones;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::warn;

/// Parse the ten digits and optional timezone code of a compact token
///
/// The naive wall-clock reading is converted to UTC by subtracting the zone
/// offset. The calendar check is exact, so `2502290000` is rejected while
/// `2402290000` is accepted.
pub fn parse_compact(digits: &str, zone: Option<&str>, year_pivot: u8) -> DateOutcome {
    let Some([yy, month, day, hour, minute]) = split_components(digits) else {
        return DateOutcome::default();
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 {
        return DateOutcome::default();
    }

    let year = expand_year(yy, year_pivot);
    let Some(local) =
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
    else {
        return DateOutcome::default();
    };

    let (offset_minutes, unknown_timezone) = match zone {
        None => (0, None),
        Some(code) => match timezones::offset_minutes(code) {
            Some(offset) => (offset, None),
            None => {
                warn!("Unknown timezone code '{}' in date token, assuming UTC", code);
                (0, Some(code.to_string()))
            }
        },
    };

    let value = local
        .checked_sub_signed(Duration::minutes(i64::from(offset_minutes)))
        .map(|utc| Validity::At(DateTime::<Utc>::from_naive_utc_and_offset(utc, Utc)));

    DateOutcome {
        value,
        unknown_timezone,
    }
}

/// Map a two-digit year onto a century using the pivot
pub fn expand_year(yy: u32, year_pivot: u8) -> i32 {
    let yy = yy as i32;
    if yy <= i32::from(year_pivot) {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn split_components(digits: &str) -> Option<[u32; 5]> {
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut components = [0u32; 5];
    for (index, component) in components.iter_mut().enumerate() {
        let start = index * 2;
        *component = digits[start..start + 2].parse().ok()?;
    }
    Some(components)
}
