//! Application constants for the NOTAM processor
//!
//! This module contains the fixed lookup tables, default values and output
//! literals used throughout the NOTAM processor.

// =============================================================================
// Date Handling
// =============================================================================

/// Two-digit years at or below this value belong to the 2000s, above it to the 1900s
pub const DEFAULT_YEAR_PIVOT: u8 = 50;

/// Output format for normalized UTC timestamps
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Output literal for an indefinite validity end
pub const PERMANENT_LITERAL: &str = "PERMANENT";

/// Canonical raw token for a permanent `C)` field
pub const PERM_TOKEN: &str = "PERM";

/// Output literal for a record without a NOTAM number
pub const NUMBER_NOT_AVAILABLE: &str = "N/A";

/// Prefix for ids derived from a content hash
pub const HASH_ID_PREFIX: &str = "notam-";

/// Number of hex characters kept from the content hash
pub const HASH_ID_LENGTH: usize = 16;

// =============================================================================
// Timezone Offsets
// =============================================================================

/// Fixed timezone-offset table for compact NOTAM date tokens
///
/// Offsets are minutes east of UTC: a local wall-clock reading in a zone with
/// offset `+60` is one hour ahead of UTC, so UTC = local - offset.
pub mod timezones {
    /// All supported timezone codes with their offsets in minutes
    pub const OFFSETS: &[(&str, i32)] = &[
        // Universal
        ("UTC", 0),
        ("GMT", 0),
        ("Z", 0),
        ("ZULU", 0),
        // North America
        ("HST", -600),
        ("HDT", -540),
        ("AKST", -540),
        ("AKDT", -480),
        ("PST", -480),
        ("PDT", -420),
        ("MST", -420),
        ("MDT", -360),
        ("CST", -360),
        ("CDT", -300),
        ("EST", -300),
        ("EDT", -240),
        ("AST", -240),
        ("ADT", -180),
        ("NST", -210),
        ("NDT", -150),
        // Europe
        ("WET", 0),
        ("WEST", 60),
        ("BST", 60),
        ("CET", 60),
        ("CEST", 120),
        ("EET", 120),
        ("EEST", 180),
        ("MSK", 180),
        // Asia / Pacific
        ("AWST", 480),
        ("HKT", 480),
        ("SGT", 480),
        ("JST", 540),
        ("KST", 540),
        ("ACST", 570),
        ("AEST", 600),
        ("AEDT", 660),
        ("NZST", 720),
        ("NZDT", 780),
    ];

    /// Look up the offset in minutes for a timezone code (case-insensitive)
    pub fn offset_minutes(code: &str) -> Option<i32> {
        OFFSETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(code))
            .map(|(_, offset)| *offset)
    }
}

// =============================================================================
// Q-line Subject Codes
// =============================================================================

/// Q-code subject prefixes (second and third letter of the Q-code)
pub mod q_codes {
    /// Runway subject
    pub const RUNWAY: &str = "MR";

    /// Taxiway subject
    pub const TAXIWAY: &str = "MX";

    /// Fuel availability subject
    pub const FUEL: &str = "FU";

    /// First letters of instrument landing and en-route navaid subjects
    pub const NAVAID_PREFIXES: &[char] = &['I', 'N'];
}

// =============================================================================
// Upstream Type Codes
// =============================================================================

/// Upstream API type code marking a cancellation NOTAM
pub const API_TYPE_CANCELLATION: &str = "C";

// =============================================================================
// CLI Defaults
// =============================================================================

/// File extensions recognized as NOTAM batch input
pub const INPUT_EXTENSIONS: &[&str] = &["json", "jsonl", "txt"];

/// Default log target used for the tracing filter
pub const LOG_TARGET: &str = "notam_processor";
