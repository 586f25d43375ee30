//! Keyword flag rules for NOTAM classification
//!
//! Each flag is a word-boundary regex over the uppercased combined text.
//! Flags are evaluated independently; [`ClassificationFlags::resolve`] applies
//! the display priority.

use crate::app::models::Classification;
use crate::constants::API_TYPE_CANCELLATION;
use regex::Regex;
use std::sync::OnceLock;

fn cancelled_re() -> &'static Regex {
    static CANCELLED_RE: OnceLock<Regex> = OnceLock::new();
    CANCELLED_RE.get_or_init(|| {
        Regex::new(r"\b(?:CANCELLED|CANCELED|CNL|NOTAMC)\b").expect("valid cancelled regex")
    })
}

fn navaid_re() -> &'static Regex {
    static NAVAID_RE: OnceLock<Regex> = OnceLock::new();
    NAVAID_RE.get_or_init(|| {
        Regex::new(
            r"\b(?:ILS|LOC|LOCALIZER|LLZ|GS|GP|GLIDESLOPE|GLIDE\s*(?:SLOPE|PATH)|VOR|DME|VORTAC|NDB|TACAN|RNAV|GPS|GNSS|WAAS|LPV|ALS|ALSF\d?|MALS|MALSR|MALSF|SSALR|SSALF|ODALS|PAPI|VASI|REIL)\b",
        )
        .expect("valid navaid regex")
    })
}

fn surface_condition_re() -> &'static Regex {
    static SURFACE_CONDITION_RE: OnceLock<Regex> = OnceLock::new();
    SURFACE_CONDITION_RE.get_or_init(|| Regex::new(r"\bRSC\b").expect("valid RSC regex"))
}

fn friction_index_re() -> &'static Regex {
    static FRICTION_INDEX_RE: OnceLock<Regex> = OnceLock::new();
    FRICTION_INDEX_RE.get_or_init(|| Regex::new(r"\bCRFI\b").expect("valid CRFI regex"))
}

fn runway_re() -> &'static Regex {
    static RUNWAY_RE: OnceLock<Regex> = OnceLock::new();
    RUNWAY_RE.get_or_init(|| Regex::new(r"\b(?:RWY|RWYS|RUNWAY|RUNWAYS)\b").expect("valid runway regex"))
}

fn taxiway_re() -> &'static Regex {
    static TAXIWAY_RE: OnceLock<Regex> = OnceLock::new();
    TAXIWAY_RE.get_or_init(|| {
        Regex::new(r"\b(?:TWY|TWYS|TAXIWAY|TAXIWAYS|TAXILANE)\b").expect("valid taxiway regex")
    })
}

fn fuel_re() -> &'static Regex {
    static FUEL_RE: OnceLock<Regex> = OnceLock::new();
    FUEL_RE.get_or_init(|| {
        Regex::new(r"\b(?:FUEL|AVGAS|MOGAS|100LL|JET\s*A(?:-?1)?)\b").expect("valid fuel regex")
    })
}

/// Boolean keyword flags for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationFlags {
    pub cancelled: bool,
    pub navaid: bool,
    pub surface_condition: bool,
    pub friction_index: bool,
    pub runway: bool,
    pub taxiway: bool,
    pub fuel: bool,
}

impl ClassificationFlags {
    /// Evaluate every flag over already-uppercased text
    pub fn evaluate(upper_text: &str, api_type: Option<&str>) -> Self {
        Self {
            cancelled: cancelled_re().is_match(upper_text) || is_cancellation_type(api_type),
            navaid: navaid_re().is_match(upper_text),
            surface_condition: surface_condition_re().is_match(upper_text),
            friction_index: friction_index_re().is_match(upper_text),
            runway: runway_re().is_match(upper_text),
            taxiway: taxiway_re().is_match(upper_text),
            fuel: fuel_re().is_match(upper_text),
        }
    }

    /// Highest-priority category whose flag is set
    pub fn resolve(&self) -> Option<Classification> {
        [
            (self.cancelled, Classification::Cancelled),
            (self.navaid, Classification::Navaid),
            (self.surface_condition, Classification::SurfaceCondition),
            (self.friction_index, Classification::FrictionIndex),
            (self.runway, Classification::Runway),
            (self.taxiway, Classification::Taxiway),
            (self.fuel, Classification::Fuel),
        ]
        .into_iter()
        .find_map(|(set, classification)| set.then_some(classification))
    }
}

/// Whether an upstream type code marks a cancellation
pub fn is_cancellation_type(api_type: Option<&str>) -> bool {
    api_type.map(str::trim).is_some_and(|code| {
        code.eq_ignore_ascii_case(API_TYPE_CANCELLATION) || code.to_uppercase().contains("CANCEL")
    })
}
