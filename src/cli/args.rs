//! Command-line argument definitions for the NOTAM processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::Source;
use crate::config::ProcessorConfig;
use crate::constants::DEFAULT_YEAR_PIVOT;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the NOTAM processor
///
/// Parses raw FAA and NAV CANADA NOTAM text into normalized records with
/// UTC validity windows and a display classification.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "notam-processor",
    version,
    about = "Parse raw NOTAM text into normalized, UTC-anchored, classified records",
    long_about = "Reads raw NOTAMs as delivered by FAA and NAV CANADA feeds, extracts the ICAO \
                  fields, resolves validity dates to UTC (including local timezone suffixes and \
                  PERM), classifies each NOTAM for display and resolves cancellations across \
                  the batch."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the NOTAM processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Normalize, merge and emit a batch of NOTAMs (main command)
    Process(ProcessArgs),
    /// Report data-quality issues per NOTAM without emitting records
    Validate(ProcessArgs),
    /// Normalize a single date token
    Date(DateArgs),
}

/// Arguments for the process and validate commands
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input files, directories or glob patterns
    ///
    /// Accepts `.json` (array of input records), `.jsonl` (one record per
    /// line) and `.txt` (raw NOTAMs separated by blank lines). Directories are
    /// walked recursively.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        required = true,
        num_args = 1..,
        help = "Input file, directory or glob pattern (repeatable)"
    )]
    pub inputs: Vec<String>,

    /// Issuing system assumed for `.txt` inputs
    #[arg(
        long = "source",
        value_name = "SOURCE",
        default_value = "FAA",
        help = "Source for plain-text inputs (FAA or NAV_CANADA)"
    )]
    pub source: Source,

    /// Output file; stdout when omitted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write records to this file instead of stdout"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for records
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Drop NOTAMs whose validity ended before the reference time
    #[arg(long = "exclude-expired", help = "Drop expired NOTAMs")]
    pub exclude_expired: bool,

    /// Reference time for expiry decisions (RFC 3339); defaults to now
    #[arg(
        long = "now",
        value_name = "TIMESTAMP",
        help = "Reference time for expiry decisions (e.g. 2025-01-15T12:00:00Z)"
    )]
    pub now: Option<DateTime<Utc>>,

    /// Two-digit year window boundary
    #[arg(
        long = "year-pivot",
        value_name = "YY",
        default_value_t = DEFAULT_YEAR_PIVOT,
        help = "Two-digit years up to this value map to 20YY, others to 19YY"
    )]
    pub year_pivot: u8,

    /// Keep NOTAMs that a cancellation in the batch supersedes
    #[arg(long = "keep-superseded", help = "Keep NOTAMs cancelled within the batch")]
    pub keep_superseded: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the date command
#[derive(Debug, Clone, Parser)]
pub struct DateArgs {
    /// Date token, e.g. `2501312359EST`, `PERM` or `2025-01-31T23:59:00Z`
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Two-digit year window boundary
    #[arg(long = "year-pivot", value_name = "YY", default_value_t = DEFAULT_YEAR_PIVOT)]
    pub year_pivot: u8,

    /// Output format
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// One JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl ProcessArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.iter().all(|input| input.trim().is_empty()) {
            return Err(Error::configuration("At least one input path is required"));
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        self.to_config().validate()
    }

    /// Map arguments onto processor configuration
    pub fn to_config(&self) -> ProcessorConfig {
        let mut config = ProcessorConfig::default().with_year_pivot(self.year_pivot);
        if self.keep_superseded {
            config = config.keeping_superseded();
        }
        if self.exclude_expired {
            config = config.with_expired_excluded();
        }
        if let Some(now) = self.now {
            config = config.with_reference_time(now);
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode, not piping records)
    pub fn show_progress(&self) -> bool {
        !self.quiet && (self.output_file.is_some() || self.output_format == OutputFormat::Human)
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            source: Source::Faa,
            output_file: None,
            output_format: OutputFormat::Human,
            exclude_expired: false,
            now: None,
            year_pivot: DEFAULT_YEAR_PIVOT,
            keep_superseded: false,
            verbose: 0,
            quiet: false,
        }
    }
}
