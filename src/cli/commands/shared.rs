//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::Result;
use crate::cli::args::OutputFormat;
use crate::constants::LOG_TARGET;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Number of input files read
    pub files_read: usize,
    /// Number of raw NOTAMs loaded
    pub records_read: usize,
    /// Number of records emitted
    pub records_written: usize,
    /// Number of data-quality notes raised
    pub quality_issues: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunStats {
    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} NOTAMs from {} files -> {} records, {} data-quality notes in {}",
            self.records_read,
            self.files_read,
            self.records_written,
            self.quality_issues,
            HumanDuration(self.processing_time)
        )
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar for per-record processing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Serialize items as a JSON array or JSON lines
pub fn render_json<T: serde::Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Jsonl => {
            let mut lines = Vec::with_capacity(items.len());
            for item in items {
                lines.push(
                    serde_json::to_string(item)
                        .map_err(|e| crate::Error::json("output record", e))?,
                );
            }
            Ok(lines.join("\n"))
        }
        _ => serde_json::to_string_pretty(items).map_err(|e| crate::Error::json("output records", e)),
    }
}

/// Write rendered output to a file or stdout
pub async fn write_output(rendered: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            let mut content = rendered.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            tokio::fs::write(path, content).await.map_err(|e| {
                crate::Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            debug!("Wrote output to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
