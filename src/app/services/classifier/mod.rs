//! NOTAM classification
//!
//! Assigns one display category per record. The category order is a safety
//! ordering used by display grouping: a cancellation always wins, so a
//! cancelled runway closure is never shown as an active closure, and navaid
//! outages outrank plain runway or taxiway notices.
//!
//! Priority, highest first: Cancelled, Navaid, SurfaceCondition (RSC),
//! FrictionIndex (CRFI), Runway, Taxiway, Fuel, Other.

pub mod rules;

#[cfg(test)]
pub mod tests;

use crate::app::models::{Classification, ParsedFields};
use rules::ClassificationFlags;
use tracing::trace;

/// Classify combined summary/raw text
pub fn classify(combined_text: &str, api_type: Option<&str>) -> Classification {
    let upper = combined_text.to_uppercase();
    ClassificationFlags::evaluate(&upper, api_type)
        .resolve()
        .unwrap_or(Classification::Other)
}

/// Classify a record from its extracted fields and raw text
///
/// The combined text is built once per record. When no keyword flag fires,
/// the Q-code subject (`QMRLC` is a runway NOTAM) decides.
pub fn classify_record(
    fields: Option<&ParsedFields>,
    raw_text: &str,
    api_type: Option<&str>,
) -> Classification {
    let summary = fields.map_or("", |f| f.body.as_str());
    let combined = combined_text(summary, raw_text);
    let flags = ClassificationFlags::evaluate(&combined, api_type);

    if let Some(classification) = flags.resolve() {
        trace!("Classified by keyword flags {:?} as {}", flags, classification);
        return classification;
    }

    fields
        .and_then(ParsedFields::q_line_decoded)
        .and_then(|q_line| q_line.subject_classification())
        .unwrap_or(Classification::Other)
}

/// Uppercased concatenation of summary and raw text
pub fn combined_text(summary: &str, raw_text: &str) -> String {
    let mut combined = String::with_capacity(summary.len() + raw_text.len() + 1);
    combined.push_str(summary);
    combined.push(' ');
    combined.push_str(raw_text);
    combined.to_uppercase()
}
