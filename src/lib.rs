//! NOTAM Processor Library
//!
//! A Rust library for turning free-form aviation Notice-to-Airmen (NOTAM) text
//! into normalized records with UTC-anchored validity windows and a display
//! classification.
//!
//! This library provides tools for:
//! - Extracting ICAO fields (Q, A, B, C, D, E, F, G) and NOTAM number /
//!   cancellation markers from loosely formatted text
//! - Normalizing compact `YYMMDDHHMM[TZ]`, ISO-8601 and `PERM` date tokens
//! - Classifying NOTAMs into safety-ordered display categories
//! - Resolving cancellations and ordering a batch for display
//! - Comprehensive error handling that never aborts a batch on one bad record
//!
//! ```rust
//! use notam_processor::{NotamInput, NotamProcessor, ProcessorConfig, Source};
//!
//! let processor = NotamProcessor::new(ProcessorConfig::default());
//! let input = NotamInput::new(
//!     "A1234/25 NOTAMN\nQ) KZNY/QMRLC/IV/NBO/A/000/999/4038N07347W005\n\
//!      A) KJFK B) 2501010000 C) 2501312359\nE) RWY 04L/22R CLSD",
//!     Source::Faa,
//! );
//! let record = processor.process_record(&input);
//! assert_eq!(record.notam_number.as_deref(), Some("A1234/25"));
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod classifier;
        pub mod datetime_normalizer;
        pub mod notam_parser;
        pub mod record_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{
    Classification, DataQualityIssue, NormalizedNotam, NotamInput, NotamOutput, ParsedFields,
    Source, TimeStatus, Validity,
};
pub use app::services::record_processor::NotamProcessor;
pub use config::ProcessorConfig;

/// Result type alias for the NOTAM processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the I/O and command-line surface of the processor.
///
/// Record-level problems (unparseable text, bad dates, unknown timezones) are
/// never reported through this type; they become data-quality notes on the
/// affected record instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("JSON error in '{context}': {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input file could not be interpreted as a NOTAM batch
    #[error("Input format error in file '{file}': {message}")]
    InputFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid glob pattern for input selection
    #[error("Invalid input pattern '{pattern}': {message}")]
    GlobPattern { pattern: String, message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an input format error
    pub fn input_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a glob pattern error
    pub fn glob_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GlobPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            context: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::GlobPattern {
            pattern: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}
