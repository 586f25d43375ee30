//! Record processing module for NOTAM batches
//!
//! This module turns raw NOTAM inputs into the ordered, de-duplicated list of
//! normalized records handed to display and caching collaborators.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main NotamProcessor struct and pipeline orchestration
//! - [`date_resolution`] - Raw text, parsed field, then API fallback for validity bounds
//! - [`merge`] - Cancellation resolution, id de-duplication and display ordering
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! For each record:
//!
//! 1. **Extraction**: ICAO fields are pulled out of the raw text; on failure the
//!    raw text stands in as the body and a data-quality note is recorded
//! 2. **Date resolution**: `B)` and `C)` go through the fallback chain
//! 3. **Classification**: keyword flags over body and raw text, Q-code fallback
//!
//! Then for the batch:
//!
//! 4. **Merge**: records named by a cancellation are dropped, repeated ids are
//!    removed and the rest is sorted for display
//! 5. **Expiry filter** (optional): records that ended before the reference
//!    time are dropped
//!
//! # Example Usage
//!
//! ```rust
//! use notam_processor::{NotamInput, NotamProcessor, ProcessorConfig, Source};
//!
//! let processor = NotamProcessor::new(ProcessorConfig::default());
//! let result = processor.process_batch(vec![NotamInput::new(
//!     "A0001/25 NOTAMN\nA) CYYZ B) 2501010000 C) PERM\nE) TWY C CLSD",
//!     Source::NavCanada,
//! )]);
//!
//! println!("Processing summary: {}", result.summary());
//! assert_eq!(result.record_count(), 1);
//! assert!(result.records[0].is_permanent());
//! ```

pub mod date_resolution;
pub mod merge;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use date_resolution::{FieldResolution, resolve_field};
pub use merge::{MergeOutcome, filter_current, merge, merge_records, merge_with_stats};
pub use processor::NotamProcessor;
pub use stats::{ProcessingResult, ProcessingStats};
