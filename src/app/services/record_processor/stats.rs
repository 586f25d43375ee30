//! Processing statistics and result structures for the NOTAM pipeline
//!
//! This module provides types for tracking how a batch fared: structural parse
//! failures, date problems, merge drops and the classification mix of what was
//! kept.

use crate::app::models::{Classification, DataQualityIssue, NormalizedNotam, NotamOutput};
use std::collections::BTreeMap;

/// Statistics for one processed batch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessingStats {
    /// Total number of input records
    pub total_input: usize,
    /// Records with recognizable ICAO structure
    pub structured: usize,
    /// Records that fell back to raw text as body
    pub structural_failures: usize,
    /// Date tokens present but unreadable
    pub unresolved_dates: usize,
    /// Date tokens with a timezone code missing from the table
    pub unknown_timezones: usize,
    /// Records whose end precedes their start
    pub inverted_windows: usize,
    /// Raw-text and parsed dates that disagreed
    pub date_disagreements: usize,
    /// Records dropped because a cancellation in the batch names them
    pub superseded: usize,
    /// Records dropped as id duplicates
    pub duplicates: usize,
    /// Records dropped by expiry filtering
    pub expired: usize,
    /// Final number of output records
    pub final_output: usize,
    /// Final records per classification
    pub classification_counts: BTreeMap<Classification, usize>,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the data-quality notes of one normalized record
    pub fn record_quality(&mut self, record: &NormalizedNotam) {
        if record.fields.is_some() {
            self.structured += 1;
        }

        for issue in &record.quality {
            match issue {
                DataQualityIssue::StructuralParseFailure { .. } => self.structural_failures += 1,
                DataQualityIssue::UnparseableDate { .. } => self.unresolved_dates += 1,
                DataQualityIssue::UnknownTimezone { .. } => self.unknown_timezones += 1,
                DataQualityIssue::InvertedValidity => self.inverted_windows += 1,
                DataQualityIssue::DateSourceDisagreement { .. } => self.date_disagreements += 1,
                DataQualityIssue::PermanentStart => self.unresolved_dates += 1,
            }
        }
    }

    /// Tally the classification mix of the final records
    pub fn count_classifications(&mut self, records: &[NormalizedNotam]) {
        self.classification_counts.clear();
        for record in records {
            *self
                .classification_counts
                .entry(record.classification)
                .or_insert(0) += 1;
        }
        self.final_output = records.len();
    }

    /// Number of final records with the given classification
    pub fn classification_count(&self, classification: Classification) -> usize {
        self.classification_counts
            .get(&classification)
            .copied()
            .unwrap_or(0)
    }

    /// Share of input records with recognizable structure, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.structured as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Check if processing was mostly successful (>90% structured)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Records removed by merging and filtering
    pub fn dropped(&self) -> usize {
        self.superseded + self.duplicates + self.expired
    }

    /// Get summary of processing pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} NOTAMs ({:.1}% structured) | \
             Superseded: {} | Duplicates: {} | Expired: {} | \
             Unresolved dates: {} | Unknown timezones: {} | Inverted windows: {}",
            self.total_input,
            self.final_output,
            self.success_rate(),
            self.superseded,
            self.duplicates,
            self.expired,
            self.unresolved_dates,
            self.unknown_timezones,
            self.inverted_windows
        )
    }
}

/// Result of processing one batch
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Merged, ordered records
    pub records: Vec<NormalizedNotam>,
    /// Processing statistics
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// Create a new processing result
    pub fn new(records: Vec<NormalizedNotam>, stats: ProcessingStats) -> Self {
        Self { records, stats }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_successful(&self) -> bool {
        self.stats.is_successful()
    }

    pub fn success_rate(&self) -> f64 {
        self.stats.success_rate()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }

    /// Collaborator-facing output records, in display order
    pub fn outputs(&self) -> Vec<NotamOutput> {
        self.records.iter().map(NotamOutput::from).collect()
    }
}
