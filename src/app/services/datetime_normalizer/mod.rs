//! Date token normalization for NOTAM validity fields
//!
//! NOTAM validity bounds arrive in three shapes:
//! - compact ICAO form `YYMMDDHHMM`, optionally followed by a 1–4 letter
//!   timezone code (`2501312359`, `2503152359EST`)
//! - ISO-8601 timestamps from upstream APIs (`2025-01-31T23:59:00Z`)
//! - the `PERM` / `PERMANENT` sentinel
//!
//! All of them are normalized into a [`Validity`]. Nothing here fails hard:
//! malformed tokens and out-of-range components yield `None`, and an unknown
//! timezone code falls back to UTC with a warning.
//!
//! ## Usage
//!
//! ```rust
//! use notam_processor::app::services::datetime_normalizer::normalize;
//! use notam_processor::Validity;
//!
//! assert_eq!(normalize(" perm "), Some(Validity::Permanent));
//! let end = normalize("2501312359").unwrap();
//! assert_eq!(end.to_output_string(), "2025-01-31T23:59:00Z");
//! assert_eq!(normalize("2502301200"), None);
//! ```

pub mod compact;
pub mod iso;

#[cfg(test)]
pub mod tests;

use crate::app::models::Validity;
use crate::constants::DEFAULT_YEAR_PIVOT;
use regex::Regex;
use std::sync::OnceLock;

fn compact_re() -> &'static Regex {
    static COMPACT_RE: OnceLock<Regex> = OnceLock::new();
    COMPACT_RE
        .get_or_init(|| Regex::new(r"^(\d{10})\s*([A-Z]{1,4})?$").expect("valid compact regex"))
}

/// Result of normalizing one token, with any soft warning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateOutcome {
    /// Normalized value; None when the token could not be interpreted
    pub value: Option<Validity>,

    /// Timezone code that was not in the table (UTC was assumed)
    pub unknown_timezone: Option<String>,
}

impl DateOutcome {
    fn resolved(value: Validity) -> Self {
        Self {
            value: Some(value),
            unknown_timezone: None,
        }
    }
}

/// Date normalizer with a configurable two-digit year window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeNormalizer {
    year_pivot: u8,
}

impl Default for DateTimeNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_PIVOT)
    }
}

impl DateTimeNormalizer {
    /// Create a normalizer; two-digit years `<= year_pivot` map to the 2000s
    pub fn new(year_pivot: u8) -> Self {
        Self { year_pivot }
    }

    pub fn year_pivot(&self) -> u8 {
        self.year_pivot
    }

    /// Normalize a token, discarding warnings
    pub fn normalize(&self, token: &str) -> Option<Validity> {
        self.normalize_detailed(token).value
    }

    /// Normalize a token and report an unknown timezone code, if any
    pub fn normalize_detailed(&self, token: &str) -> DateOutcome {
        let token = strip_field_prefix(token.trim());
        if token.is_empty() {
            return DateOutcome::default();
        }

        let upper = token.to_ascii_uppercase();
        if is_permanent(&upper) {
            return DateOutcome::resolved(Validity::Permanent);
        }

        if let Some(caps) = compact_re().captures(&upper) {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let zone = caps.get(2).map(|m| m.as_str());
            return compact::parse_compact(digits, zone, self.year_pivot);
        }

        if upper.contains('T') {
            return DateOutcome {
                value: iso::parse_iso(token).map(Validity::At),
                unknown_timezone: None,
            };
        }

        DateOutcome::default()
    }
}

/// Normalize a token with the default year window
pub fn normalize(token: &str) -> Option<Validity> {
    DateTimeNormalizer::default().normalize(token)
}

/// Whether isolated field content denotes a permanent NOTAM
fn is_permanent(upper: &str) -> bool {
    let compact: String = upper.chars().filter(|c| !c.is_whitespace()).collect();
    compact.contains("PERM")
}

/// Remove a leading `X)` field marker
fn strip_field_prefix(token: &str) -> &str {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(')')) if matches!(letter, 'Q' | 'A'..='G') => token[2..].trim_start(),
        _ => token,
    }
}
