//! Main NOTAM processor implementation and pipeline orchestration
//!
//! This module contains the NotamProcessor struct, which runs each raw NOTAM
//! through extraction, date resolution and classification, then merges the
//! batch.

use crate::app::models::{
    DataQualityIssue, FieldTag, NormalizedNotam, NotamInput, ParsedFields, Validity,
    content_hash_id,
};
use crate::app::services::classifier::{classify_record, rules::is_cancellation_type};
use crate::app::services::datetime_normalizer::DateTimeNormalizer;
use crate::app::services::notam_parser::text::clean_text;
use crate::app::services::notam_parser::{HeaderInfo, extract, parse_header_line};
use crate::config::ProcessorConfig;
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use super::{
    date_resolution::resolve_field,
    merge::{filter_current, merge_records},
    stats::{ProcessingResult, ProcessingStats},
};

/// NOTAM processor for one configuration
///
/// Records are normalized independently; a malformed record never aborts the
/// batch, it just carries data-quality notes.
///
/// # Example
///
/// ```rust
/// use notam_processor::{NotamInput, NotamProcessor, ProcessorConfig, Source};
///
/// let processor = NotamProcessor::new(ProcessorConfig::default());
/// let inputs = vec![
///     NotamInput::new("A1234/25 NOTAMN\nA) KJFK B) 2501010000 C) 2501312359\nE) RWY 04L/22R CLSD", Source::Faa),
///     NotamInput::new("A1235/25 NOTAMC A1234/25\nA) KJFK B) 2501020000\nE) RWY 04L/22R CLSD", Source::Faa),
/// ];
///
/// let result = processor.process_batch(inputs);
/// assert_eq!(result.record_count(), 1);
/// assert_eq!(result.stats.superseded, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotamProcessor {
    config: ProcessorConfig,
    normalizer: DateTimeNormalizer,
}

impl NotamProcessor {
    /// Create a processor from configuration
    pub fn new(config: ProcessorConfig) -> Self {
        let normalizer = DateTimeNormalizer::new(config.year_pivot);
        Self { config, normalizer }
    }

    /// Get the configuration used by this processor
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &DateTimeNormalizer {
        &self.normalizer
    }

    /// Normalize a single raw NOTAM
    pub fn process_record(&self, input: &NotamInput) -> NormalizedNotam {
        let mut quality = Vec::new();

        let fields = match extract(&input.raw_text) {
            Ok(fields) => Some(fields),
            Err(failure) => {
                warn!(
                    "Structural parse failure for {} NOTAM: {}",
                    input.source, failure
                );
                quality.push(DataQualityIssue::StructuralParseFailure {
                    reason: failure.to_string(),
                });
                None
            }
        };

        // Without fields the header line may still name the NOTAM
        let header = match &fields {
            Some(fields) => header_from_fields(fields),
            None => first_line_header(&input.raw_text),
        };

        let from = resolve_field(
            &self.normalizer,
            FieldTag::B,
            &input.raw_text,
            fields.as_ref().map(|f| f.valid_from_raw.as_str()),
            input.api_valid_from.as_deref(),
        );
        let to = resolve_field(
            &self.normalizer,
            FieldTag::C,
            &input.raw_text,
            fields.as_ref().map(|f| f.valid_to_raw.as_str()),
            input.api_valid_to.as_deref(),
        );
        quality.extend(from.issues);
        quality.extend(to.issues);

        let valid_from = match from.value {
            Some(Validity::At(instant)) => Some(instant),
            Some(Validity::Permanent) => {
                quality.push(DataQualityIssue::PermanentStart);
                None
            }
            None => None,
        };
        let valid_to = to.value;

        if let (Some(start), Some(Validity::At(end))) = (valid_from, valid_to) {
            if end < start {
                debug!("Inverted validity window: {} ends before {}", end, start);
                quality.push(DataQualityIssue::InvertedValidity);
            }
        }

        let api_type = input.api_type.as_deref();
        let classification = classify_record(fields.as_ref(), &input.raw_text, api_type);
        let is_cancellation = header.is_cancellation || is_cancellation_type(api_type);

        let id = record_id(input, header.notam_number.as_deref(), fields.as_ref());

        debug!(
            "Normalized {} ({}) as {} with {} quality notes",
            id,
            input.source,
            classification,
            quality.len()
        );

        NormalizedNotam {
            id,
            notam_number: header.notam_number,
            valid_from,
            valid_to,
            valid_from_source: valid_from.and(from.source),
            valid_to_source: to.source,
            classification,
            source: input.source,
            is_cancellation,
            cancels_notam: header.cancels_notam,
            fields,
            quality,
            raw_text: input.raw_text.clone(),
        }
    }

    /// Normalize and merge a batch
    pub fn process_batch(&self, inputs: Vec<NotamInput>) -> ProcessingResult {
        self.process_batch_with_progress(inputs, None)
    }

    /// Normalize and merge a batch, reporting per-record progress
    pub fn process_batch_with_progress(
        &self,
        inputs: Vec<NotamInput>,
        progress_bar: Option<&ProgressBar>,
    ) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.total_input = inputs.len();

        info!("Starting NOTAM processing pipeline for {} records", inputs.len());

        let mut records = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let record = self.process_record(input);
            stats.record_quality(&record);
            records.push(record);

            if let Some(pb) = progress_bar {
                pb.set_position(index as u64 + 1);
            }
        }

        let merged = merge_records(records, self.config.drop_superseded);
        stats.superseded = merged.superseded;
        stats.duplicates = merged.duplicates;
        let mut records = merged.records;

        if self.config.exclude_expired {
            let now = self.config.reference_time_or_now();
            let before = records.len();
            records = filter_current(records, now);
            stats.expired = before - records.len();
            debug!("Expiry filter at {} dropped {} records", now, stats.expired);
        }

        stats.count_classifications(&records);

        info!(
            "NOTAM processing complete: {} -> {} records ({:.1}% structured)",
            stats.total_input,
            stats.final_output,
            stats.success_rate()
        );

        if !stats.is_successful() {
            // Use debug level to avoid interfering with progress bars
            debug!(
                "Low structured rate: {:.1}% ({} structural failures)",
                stats.success_rate(),
                stats.structural_failures
            );
        }

        ProcessingResult::new(records, stats)
    }
}

/// External id, else NOTAM number, else content hash
fn record_id(input: &NotamInput, notam_number: Option<&str>, fields: Option<&ParsedFields>) -> String {
    if let Some(id) = input.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    if let Some(number) = notam_number {
        return number.to_string();
    }

    let (q_line, body) = fields.map_or(("", ""), |f| (f.q_line.as_str(), f.body.as_str()));
    content_hash_id(q_line, body, &input.raw_text)
}

fn header_from_fields(fields: &ParsedFields) -> HeaderInfo {
    HeaderInfo {
        notam_number: fields.notam_number.clone(),
        is_cancellation: fields.is_cancellation,
        cancels_notam: fields.cancels_notam.clone(),
        replaces_notam: fields.replaces_notam.clone(),
    }
}

fn first_line_header(raw_text: &str) -> HeaderInfo {
    let text = clean_text(raw_text);
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(parse_header_line)
        .unwrap_or_default()
}
