//! ISO-8601 timestamp parsing
//!
//! Upstream APIs are inconsistent about the zone designator: some send
//! `2025-01-31T23:59:00Z`, some `2025-01-31T23:59:00` meaning UTC, and a few
//! drop the seconds. A missing designator is read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Parse an ISO-8601 timestamp into UTC
pub fn parse_iso(token: &str) -> Option<DateTime<Utc>> {
    let token = token.trim();
    let (date_part, time_part) = token.split_once(['T', 't'])?;
    if date_part.is_empty() || time_part.is_empty() {
        return None;
    }

    let has_zulu = time_part.ends_with(['Z', 'z']);
    let has_offset = time_part.contains(['+', '-']);

    if !has_zulu && !has_offset {
        let candidate = format!("{}Z", token);
        return DateTime::parse_from_rfc3339(&candidate)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_naive(token));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.with_timezone(&Utc));
    }

    if has_zulu {
        return parse_naive(&token[..token.len() - 1]);
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::<FixedOffset>::parse_from_str(token, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive(token: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(token, format).ok())
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}
