//! Data models for NOTAM processing
//!
//! This module contains the core data structures for representing raw NOTAM
//! input, the ICAO fields extracted from it, and the normalized records handed
//! to display and caching collaborators.

use crate::constants::{
    HASH_ID_LENGTH, HASH_ID_PREFIX, NUMBER_NOT_AVAILABLE, PERM_TOKEN, PERMANENT_LITERAL,
    UTC_TIMESTAMP_FORMAT, q_codes,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Source and Input Structures
// =============================================================================

/// Issuing system a raw NOTAM was fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// United States Federal Aviation Administration
    #[serde(rename = "FAA")]
    Faa,

    /// NAV CANADA (CFPS)
    #[serde(
        rename(serialize = "NAV CANADA", deserialize = "NAV_CANADA"),
        alias = "NAV CANADA"
    )]
    NavCanada,
}

impl Source {
    /// Display label used in output records
    pub fn label(&self) -> &'static str {
        match self {
            Source::Faa => "FAA",
            Source::NavCanada => "NAV CANADA",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "FAA" => Ok(Source::Faa),
            "NAVCANADA" | "CFPS" => Ok(Source::NavCanada),
            _ => Err(Error::configuration(format!(
                "Unknown NOTAM source '{}' (expected FAA or NAV_CANADA)",
                s
            ))),
        }
    }
}

/// One raw NOTAM as delivered by the fetch collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotamInput {
    /// External identifier assigned by the upstream API, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Raw NOTAM text exactly as received
    pub raw_text: String,

    /// Issuing system
    pub source: Source,

    /// Validity start as reported by the upstream API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_valid_from: Option<String>,

    /// Validity end as reported by the upstream API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_valid_to: Option<String>,

    /// Upstream NOTAM type code (e.g. "N", "R", "C")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,
}

impl NotamInput {
    /// Create an input record carrying only raw text
    pub fn new(raw_text: impl Into<String>, source: Source) -> Self {
        Self {
            id: None,
            raw_text: raw_text.into(),
            source,
            api_valid_from: None,
            api_valid_to: None,
            api_type: None,
        }
    }

    /// Attach the upstream identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach upstream validity timestamps
    pub fn with_api_validity(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.api_valid_from = from.map(str::to_string);
        self.api_valid_to = to.map(str::to_string);
        self
    }

    /// Attach the upstream type code
    pub fn with_api_type(mut self, api_type: impl Into<String>) -> Self {
        self.api_type = Some(api_type.into());
        self
    }
}

// =============================================================================
// ICAO Fields
// =============================================================================

/// Single-letter ICAO field marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldTag {
    Q,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl FieldTag {
    /// Parse a marker letter (case-sensitive, as it appears in NOTAM text)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(FieldTag::Q),
            'A' => Some(FieldTag::A),
            'B' => Some(FieldTag::B),
            'C' => Some(FieldTag::C),
            'D' => Some(FieldTag::D),
            'E' => Some(FieldTag::E),
            'F' => Some(FieldTag::F),
            'G' => Some(FieldTag::G),
            _ => None,
        }
    }

    /// Marker letter
    pub fn as_char(&self) -> char {
        match self {
            FieldTag::Q => 'Q',
            FieldTag::A => 'A',
            FieldTag::B => 'B',
            FieldTag::C => 'C',
            FieldTag::D => 'D',
            FieldTag::E => 'E',
            FieldTag::F => 'F',
            FieldTag::G => 'G',
        }
    }

    /// Whether this marker opens free-text body collection
    pub fn starts_body(&self) -> bool {
        matches!(self, FieldTag::E | FieldTag::F | FieldTag::G)
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{})", self.as_char())
    }
}

/// Raw ICAO fields extracted from one NOTAM, not yet normalized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFields {
    /// NOTAM number (`A1234/25`)
    pub notam_number: Option<String>,

    /// Whether the header carries a `NOTAMC <ref>` marker
    pub is_cancellation: bool,

    /// NOTAM number cancelled by this one
    pub cancels_notam: Option<String>,

    /// NOTAM number replaced by this one (`NOTAMR <ref>`)
    pub replaces_notam: Option<String>,

    /// `Q)` routing line
    pub q_line: String,

    /// `A)` aerodrome / FIR location
    pub aerodrome: String,

    /// `B)` raw validity start
    pub valid_from_raw: String,

    /// `C)` raw validity end (`PERM` when permanent)
    pub valid_to_raw: String,

    /// `D)` schedule
    pub schedule: String,

    /// `E)` free text, with `F)`/`G)` folded in
    pub body: String,
}

impl ParsedFields {
    /// Raw value of a single field
    pub fn field(&self, tag: FieldTag) -> &str {
        match tag {
            FieldTag::Q => &self.q_line,
            FieldTag::A => &self.aerodrome,
            FieldTag::B => &self.valid_from_raw,
            FieldTag::C => &self.valid_to_raw,
            FieldTag::D => &self.schedule,
            FieldTag::E | FieldTag::F | FieldTag::G => &self.body,
        }
    }

    /// Decode the `Q)` line into its slash-separated components
    pub fn q_line_decoded(&self) -> Option<QLine> {
        QLine::parse(&self.q_line)
    }

    /// Reconstruct canonical ICAO text from the extracted fields
    ///
    /// Feeding the result back through the extractor yields the same fields.
    pub fn to_icao_text(&self) -> String {
        let mut lines = Vec::new();

        let mut header = Vec::new();
        if let Some(number) = &self.notam_number {
            header.push(number.clone());
        }
        match (&self.cancels_notam, &self.replaces_notam) {
            (Some(cancelled), _) if self.is_cancellation => {
                header.push(format!("NOTAMC {}", cancelled));
            }
            (_, Some(replaced)) => header.push(format!("NOTAMR {}", replaced)),
            _ if self.notam_number.is_some() => header.push("NOTAMN".to_string()),
            _ => {}
        }
        if !header.is_empty() {
            lines.push(header.join(" "));
        }

        for (tag, value) in [
            (FieldTag::Q, &self.q_line),
            (FieldTag::A, &self.aerodrome),
            (FieldTag::B, &self.valid_from_raw),
            (FieldTag::C, &self.valid_to_raw),
            (FieldTag::D, &self.schedule),
            (FieldTag::E, &self.body),
        ] {
            if !value.is_empty() {
                lines.push(format!("{} {}", tag, value));
            }
        }

        lines.join("\n")
    }
}

/// Decoded `Q)` line: `FIR/QCODE/TRAFFIC/PURPOSE/SCOPE/LOWER/UPPER/COORDS`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QLine {
    pub fir: Option<String>,
    pub code: Option<String>,
    pub traffic: Option<String>,
    pub purpose: Option<String>,
    pub scope: Option<String>,
    pub lower: Option<String>,
    pub upper: Option<String>,
    pub coordinates: Option<String>,
}

impl QLine {
    /// Parse a raw Q-line; returns None when the line is empty
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.split('/').map(|part| {
            let part = part.trim();
            (!part.is_empty()).then(|| part.to_string())
        });
        let mut next = || parts.next().flatten();

        Some(Self {
            fir: next(),
            code: next(),
            traffic: next(),
            purpose: next(),
            scope: next(),
            lower: next(),
            upper: next(),
            coordinates: next(),
        })
    }

    /// Two-letter subject of the Q-code (`QMRLC` -> `MR`)
    pub fn subject(&self) -> Option<&str> {
        let code = self.code.as_deref()?;
        if code.len() >= 3 && code.starts_with('Q') && code.is_ascii() {
            Some(&code[1..3])
        } else {
            None
        }
    }

    /// Classification implied by the Q-code subject alone
    pub fn subject_classification(&self) -> Option<Classification> {
        let subject = self.subject()?;
        match subject {
            q_codes::RUNWAY => Some(Classification::Runway),
            q_codes::TAXIWAY => Some(Classification::Taxiway),
            q_codes::FUEL => Some(Classification::Fuel),
            s if s
                .chars()
                .next()
                .is_some_and(|c| q_codes::NAVAID_PREFIXES.contains(&c)) =>
            {
                Some(Classification::Navaid)
            }
            _ => None,
        }
    }
}

// =============================================================================
// Normalized Values
// =============================================================================

/// A resolved validity bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    /// A concrete UTC instant
    At(DateTime<Utc>),

    /// Valid indefinitely
    Permanent,
}

impl Validity {
    /// The instant, if this is not `Permanent`
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Validity::At(instant) => Some(*instant),
            Validity::Permanent => None,
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Validity::Permanent)
    }

    /// Output form: ISO-8601 UTC or `PERMANENT`
    pub fn to_output_string(&self) -> String {
        match self {
            Validity::At(instant) => format_utc(instant),
            Validity::Permanent => PERMANENT_LITERAL.to_string(),
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_output_string())
    }
}

/// Format a UTC instant the way output records carry it
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format(UTC_TIMESTAMP_FORMAT).to_string()
}

/// Display category of a NOTAM, declared in display priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Cancelled,
    Navaid,
    SurfaceCondition,
    FrictionIndex,
    Runway,
    Taxiway,
    Fuel,
    Other,
}

impl Classification {
    /// All categories, highest display priority first
    pub const ALL: [Classification; 8] = [
        Classification::Cancelled,
        Classification::Navaid,
        Classification::SurfaceCondition,
        Classification::FrictionIndex,
        Classification::Runway,
        Classification::Taxiway,
        Classification::Fuel,
        Classification::Other,
    ];

    /// Output tag
    pub fn tag(&self) -> &'static str {
        match self {
            Classification::Cancelled => "CANCELLED",
            Classification::Navaid => "NAVAID",
            Classification::SurfaceCondition => "SURFACE_CONDITION",
            Classification::FrictionIndex => "FRICTION_INDEX",
            Classification::Runway => "RUNWAY",
            Classification::Taxiway => "TAXIWAY",
            Classification::Fuel => "FUEL",
            Classification::Other => "OTHER",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which stage of the date fallback chain produced a validity bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSource {
    /// Token found directly in the raw ICAO text
    RawText,
    /// Structurally extracted field value
    ParsedField,
    /// Timestamp supplied by the upstream API
    Api,
}

/// Soft data-quality observation attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataQualityIssue {
    /// No recognizable ICAO fields; raw text used as body
    StructuralParseFailure { reason: String },

    /// A date token was present but could not be normalized
    UnparseableDate { field: FieldTag, token: String },

    /// Timezone code not in the offset table; UTC assumed
    UnknownTimezone { field: FieldTag, code: String },

    /// `B)` resolved to `PERM`, which has no meaning as a start
    PermanentStart,

    /// Validity end precedes validity start
    InvertedValidity,

    /// Raw-text and structured values for a date field resolved differently
    DateSourceDisagreement { field: FieldTag },
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityIssue::StructuralParseFailure { reason } => {
                write!(f, "structural parse failure: {}", reason)
            }
            DataQualityIssue::UnparseableDate { field, token } => {
                write!(f, "unparseable {} date '{}'", field, token)
            }
            DataQualityIssue::UnknownTimezone { field, code } => {
                write!(f, "unknown timezone '{}' in {}, UTC assumed", code, field)
            }
            DataQualityIssue::PermanentStart => write!(f, "validity start is PERM"),
            DataQualityIssue::InvertedValidity => write!(f, "validity end precedes start"),
            DataQualityIssue::DateSourceDisagreement { field } => {
                write!(f, "raw text and parsed {} disagree, raw text used", field)
            }
        }
    }
}

// =============================================================================
// Normalized Record
// =============================================================================

/// The externally visible, normalized NOTAM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedNotam {
    /// Stable key: external id, else NOTAM number, else content hash
    pub id: String,

    /// NOTAM number (`A1234/25`)
    pub notam_number: Option<String>,

    /// Validity start; None means unknown (treat as already started)
    pub valid_from: Option<DateTime<Utc>>,

    /// Validity end; None means unknown (treat as still running)
    pub valid_to: Option<Validity>,

    /// Stage that resolved `valid_from`
    pub valid_from_source: Option<DateSource>,

    /// Stage that resolved `valid_to`
    pub valid_to_source: Option<DateSource>,

    pub classification: Classification,

    pub source: Source,

    pub is_cancellation: bool,

    /// NOTAM number cancelled by this record
    pub cancels_notam: Option<String>,

    /// Extracted fields; None when the text had no recognizable structure
    pub fields: Option<ParsedFields>,

    /// Data-quality notes collected while normalizing
    pub quality: Vec<DataQualityIssue>,

    /// Raw text, verbatim
    pub raw_text: String,
}

impl NormalizedNotam {
    /// NOTAM number or the `N/A` placeholder
    pub fn number_or_na(&self) -> &str {
        self.notam_number.as_deref().unwrap_or(NUMBER_NOT_AVAILABLE)
    }

    /// Free-text summary: the `E)` body, or the raw text when unstructured
    pub fn summary(&self) -> &str {
        match &self.fields {
            Some(fields) if !fields.body.is_empty() => &fields.body,
            _ => &self.raw_text,
        }
    }

    /// Aerodrome from the `A)` field
    pub fn aerodrome(&self) -> Option<&str> {
        self.fields
            .as_ref()
            .map(|fields| fields.aerodrome.as_str())
            .filter(|aerodrome| !aerodrome.is_empty())
    }

    /// FIR from the `Q)` line
    pub fn fir(&self) -> Option<String> {
        self.fields
            .as_ref()
            .and_then(ParsedFields::q_line_decoded)
            .and_then(|q| q.fir)
    }

    /// Whether the end is permanent
    pub fn is_permanent(&self) -> bool {
        self.valid_to.is_some_and(|v| v.is_permanent())
    }

    pub fn has_issue(&self, predicate: impl Fn(&DataQualityIssue) -> bool) -> bool {
        self.quality.iter().any(predicate)
    }

    /// Time status relative to a reference instant
    pub fn time_status(&self, now: DateTime<Utc>) -> TimeStatus {
        TimeStatus::evaluate(self.valid_from, self.valid_to, now)
    }

    /// Convert into the collaborator-facing output record
    pub fn to_output(&self) -> NotamOutput {
        NotamOutput::from(self)
    }
}

/// Derive an id from the record content when no number or external id exists
pub fn content_hash_id(q_line: &str, summary: &str, raw_text: &str) -> String {
    let mut hasher = Sha256::new();
    if q_line.is_empty() && summary.is_empty() {
        hasher.update(raw_text.as_bytes());
    } else {
        hasher.update(q_line.as_bytes());
        hasher.update(b"\n");
        hasher.update(summary.as_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());
    format!("{}{}", HASH_ID_PREFIX, &digest[..HASH_ID_LENGTH])
}

/// Current-ness of a NOTAM, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStatus {
    /// Starts in the future
    Upcoming,
    /// In force now with a known or unknown end
    Active,
    /// In force now and never ends
    Permanent,
    /// Ended before the reference instant
    Expired,
}

impl TimeStatus {
    /// Evaluate validity bounds at `now`; unknown bounds count as open
    pub fn evaluate(
        valid_from: Option<DateTime<Utc>>,
        valid_to: Option<Validity>,
        now: DateTime<Utc>,
    ) -> Self {
        if valid_from.is_some_and(|from| from > now) {
            return TimeStatus::Upcoming;
        }

        match valid_to {
            Some(Validity::Permanent) => TimeStatus::Permanent,
            Some(Validity::At(to)) if to < now => TimeStatus::Expired,
            _ => TimeStatus::Active,
        }
    }

    /// Whether the NOTAM should be treated as in force
    pub fn is_current(&self) -> bool {
        matches!(self, TimeStatus::Active | TimeStatus::Permanent)
    }
}

// =============================================================================
// Output Record
// =============================================================================

/// Output record handed to display and caching collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotamOutput {
    pub id: String,
    pub number: String,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub classification: Classification,
    pub source: String,
    pub is_cancellation: bool,
    pub cancels: Option<String>,
    pub raw_text: String,
    pub aerodrome: Option<String>,
    pub fir: Option<String>,
    pub data_quality: Vec<String>,
}

impl From<&NormalizedNotam> for NotamOutput {
    fn from(record: &NormalizedNotam) -> Self {
        Self {
            id: record.id.clone(),
            number: record.number_or_na().to_string(),
            valid_from: record.valid_from.as_ref().map(format_utc),
            valid_to: record.valid_to.as_ref().map(Validity::to_output_string),
            classification: record.classification,
            source: record.source.label().to_string(),
            is_cancellation: record.is_cancellation,
            cancels: record.cancels_notam.clone(),
            raw_text: record.raw_text.clone(),
            aerodrome: record.aerodrome().map(str::to_string),
            fir: record.fir(),
            data_quality: record.quality.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// True when a raw `C)` value denotes a permanent NOTAM
pub fn is_perm_token(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    compact.starts_with(PERM_TOKEN)
}
