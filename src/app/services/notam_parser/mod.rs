//! ICAO field extractor for raw NOTAM text
//!
//! This module turns loosely formatted NOTAM text, as delivered by the FAA and
//! NAV CANADA, into [`ParsedFields`](crate::app::models::ParsedFields). It is
//! deliberately tolerant: escaped newlines, wrapper parentheses, several
//! fields on one line and free text without an `E)` marker are all accepted.
//!
//! ## Architecture
//!
//! The extractor is organized into logical components:
//! - [`text`] - Line-ending normalization, escape handling and line splitting
//! - [`header`] - NOTAM number and `NOTAMC`/`NOTAMR` marker detection on line 0
//! - [`markers`] - Field marker grammar and inline marker splitting
//! - [`extractor`] - The field-scanning state machine
//! - [`raw_fields`] - Direct lookup of a single field token in raw text
//!
//! ## Usage
//!
//! ```rust
//! use notam_processor::app::services::notam_parser::extract;
//!
//! let fields = extract("A1234/25 NOTAMN\nA) KJFK B) 2501010000 C) PERM\nE) TWY B CLSD").unwrap();
//! assert_eq!(fields.aerodrome, "KJFK");
//! assert_eq!(fields.valid_to_raw, "PERM");
//! assert_eq!(fields.body, "TWY B CLSD");
//! ```

pub mod extractor;
pub mod header;
pub mod markers;
pub mod raw_fields;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::{ParseFailure, ScanState, extract};
pub use header::{HeaderInfo, parse_header_line};
pub use raw_fields::find_field_token;
