//! Date fallback chain for validity bounds
//!
//! Each bound is resolved from up to three sources, first hit wins:
//! 1. the token read directly from the raw text after its `B)`/`C)` marker
//! 2. the structurally extracted field value
//! 3. the timestamp supplied by the upstream API
//!
//! When the raw-text and parsed values both resolve but differ, the raw-text
//! value is kept and a [`DataQualityIssue::DateSourceDisagreement`] is noted.

use crate::app::models::{DataQualityIssue, DateSource, FieldTag, Validity};
use crate::app::services::datetime_normalizer::{DateOutcome, DateTimeNormalizer};
use crate::app::services::notam_parser::find_field_token;
use tracing::debug;

/// Resolved value for one validity field plus what happened on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResolution {
    pub value: Option<Validity>,
    pub source: Option<DateSource>,
    pub issues: Vec<DataQualityIssue>,
}

/// Resolve one validity field through the fallback chain
pub fn resolve_field(
    normalizer: &DateTimeNormalizer,
    tag: FieldTag,
    raw_text: &str,
    parsed: Option<&str>,
    api: Option<&str>,
) -> FieldResolution {
    let raw_token = find_field_token(raw_text, tag);
    let parsed_token = parsed.map(str::trim).filter(|token| !token.is_empty());

    let raw_outcome = raw_token
        .as_deref()
        .map(|token| normalizer.normalize_detailed(token))
        .unwrap_or_default();
    let parsed_outcome = parsed_token
        .map(|token| normalizer.normalize_detailed(token))
        .unwrap_or_default();

    let mut resolution = FieldResolution::default();

    if let Some(value) = raw_outcome.value {
        if parsed_outcome.value.is_some_and(|parsed| parsed != value) {
            debug!(
                "Raw text and parsed {} disagree ({} vs {:?}), using raw text",
                tag, value, parsed_outcome.value
            );
            resolution
                .issues
                .push(DataQualityIssue::DateSourceDisagreement { field: tag });
        }
        resolution.accept(tag, value, DateSource::RawText, &raw_outcome);
        return resolution;
    }

    if let Some(value) = parsed_outcome.value {
        resolution.accept(tag, value, DateSource::ParsedField, &parsed_outcome);
        return resolution;
    }

    // Text carried a token that neither stage could read
    if let Some(token) = parsed_token.or(raw_token.as_deref()) {
        debug!("Unparseable {} token '{}'", tag, token);
        resolution.issues.push(DataQualityIssue::UnparseableDate {
            field: tag,
            token: token.to_string(),
        });
    }

    let api_outcome = api
        .map(|token| normalizer.normalize_detailed(token))
        .unwrap_or_default();
    if let Some(value) = api_outcome.value {
        resolution.accept(tag, value, DateSource::Api, &api_outcome);
    }

    resolution
}

impl FieldResolution {
    fn accept(&mut self, tag: FieldTag, value: Validity, source: DateSource, outcome: &DateOutcome) {
        self.value = Some(value);
        self.source = Some(source);

        if let Some(code) = &outcome.unknown_timezone {
            debug!("Recording unknown timezone '{}' for {}", code, tag);
            self.issues.push(DataQualityIssue::UnknownTimezone {
                field: tag,
                code: code.clone(),
            });
        }
    }
}
