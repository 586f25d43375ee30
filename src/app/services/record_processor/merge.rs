//! Batch-level merging of normalized NOTAMs
//!
//! Resolves cancellation relationships, removes repeated records and orders the
//! batch for display: newest start first, then records whose start could not
//! be read, then permanent NOTAMs.

use crate::app::models::{NormalizedNotam, TimeStatus, Validity};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Merged records plus what was removed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub records: Vec<NormalizedNotam>,
    /// Records dropped because a cancellation in the batch names them
    pub superseded: usize,
    /// Records dropped because an earlier record had the same id
    pub duplicates: usize,
}

/// Merge a batch: drop superseded records, de-duplicate and sort
pub fn merge(records: Vec<NormalizedNotam>) -> Vec<NormalizedNotam> {
    merge_with_stats(records).records
}

/// Merge a batch and report how many records were dropped
pub fn merge_with_stats(records: Vec<NormalizedNotam>) -> MergeOutcome {
    merge_records(records, true)
}

/// Merge a batch, optionally keeping records that a cancellation supersedes
pub fn merge_records(records: Vec<NormalizedNotam>, drop_superseded: bool) -> MergeOutcome {
    let cancelled: HashSet<String> = records
        .iter()
        .filter(|record| record.is_cancellation)
        .filter_map(|record| record.cancels_notam.clone())
        .collect();

    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut superseded = 0;
    let mut duplicates = 0;
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if drop_superseded && is_superseded(&record, &cancelled) {
            debug!("Dropping {} superseded by a cancellation", record.number_or_na());
            superseded += 1;
            continue;
        }

        if !seen_ids.insert(record.id.clone()) {
            debug!("Dropping duplicate record {}", record.id);
            duplicates += 1;
            continue;
        }

        kept.push(record);
    }

    sort_for_display(&mut kept);

    MergeOutcome {
        records: kept,
        superseded,
        duplicates,
    }
}

/// Drop records whose validity ended before `now`
///
/// Upcoming records and records with an unknown end are kept.
pub fn filter_current(records: Vec<NormalizedNotam>, now: DateTime<Utc>) -> Vec<NormalizedNotam> {
    records
        .into_iter()
        .filter(|record| record.time_status(now) != TimeStatus::Expired)
        .collect()
}

/// Stable display sort; ties keep input order
pub fn sort_for_display(records: &mut [NormalizedNotam]) {
    records.sort_by(compare_for_display);
}

fn is_superseded(record: &NormalizedNotam, cancelled: &HashSet<String>) -> bool {
    !record.is_cancellation
        && record
            .notam_number
            .as_ref()
            .is_some_and(|number| cancelled.contains(number))
}

/// Display group: dated starts, then unknown starts, then permanent
fn display_group(record: &NormalizedNotam) -> u8 {
    match (record.valid_to, record.valid_from) {
        (Some(Validity::Permanent), _) => 2,
        (_, Some(_)) => 0,
        (_, None) => 1,
    }
}

fn compare_for_display(a: &NormalizedNotam, b: &NormalizedNotam) -> Ordering {
    let (group_a, group_b) = (display_group(a), display_group(b));
    group_a.cmp(&group_b).then_with(|| match (group_a, a.valid_from, b.valid_from) {
        (0, Some(from_a), Some(from_b)) => from_b.cmp(&from_a),
        _ => Ordering::Equal,
    })
}
