//! Process command implementation for the NOTAM processor CLI
//!
//! Loads raw NOTAMs, runs the normalization pipeline and emits the merged
//! records in the requested format.

use super::shared::{RunStats, create_progress_bar, render_json, setup_logging, write_output};
use crate::app::models::{Classification, NormalizedNotam, TimeStatus};
use crate::app::services::record_processor::{NotamProcessor, ProcessingResult};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::cli::input::{load_inputs, resolve_input_paths};
use crate::Result;
use chrono::{DateTime, Utc};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner for the NOTAM processor
///
/// This function orchestrates the processing workflow:
/// 1. Set up logging and validate arguments
/// 2. Resolve and load input files
/// 3. Normalize and merge the batch with progress reporting
/// 4. Write records and report summary statistics
pub async fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting NOTAM processor");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;
    let config = args.to_config();
    let reference_time = config.reference_time_or_now();

    let files = resolve_input_paths(&args.inputs)?;
    let inputs = load_inputs(&files, args.source).await?;
    let records_read = inputs.len();
    info!("Loaded {} NOTAMs from {} files", records_read, files.len());

    let processor = NotamProcessor::new(config);
    let progress_bar = args
        .show_progress()
        .then(|| create_progress_bar(records_read as u64, "Normalizing NOTAMs"));

    let result = processor.process_batch_with_progress(inputs, progress_bar.as_ref());

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("Normalized {} NOTAMs", records_read));
    }

    info!("{}", result.summary());

    let rendered = match args.output_format {
        OutputFormat::Human => {
            if args.output_file.is_some() {
                colored::control::set_override(false);
            }
            render_human(&result, reference_time)
        }
        format => render_json(&result.outputs(), format)?,
    };
    write_output(&rendered, args.output_file.as_deref()).await?;

    let stats = RunStats {
        files_read: files.len(),
        records_read,
        records_written: result.record_count(),
        quality_issues: result.records.iter().map(|r| r.quality.len()).sum(),
        processing_time: start_time.elapsed(),
    };

    info!("Run complete: {}", stats.summary());
    Ok(stats)
}

/// Render records and batch statistics for a terminal
pub fn render_human(result: &ProcessingResult, now: DateTime<Utc>) -> String {
    let mut lines = Vec::with_capacity(result.record_count() + 8);

    for record in &result.records {
        lines.push(render_record_line(record, now));
    }

    let stats = &result.stats;
    lines.push(String::new());
    lines.push(format!("{}", "NOTAM Processing Summary".bright_green().bold()));
    lines.push(format!(
        "   • NOTAMs read: {}   • Records kept: {}",
        stats.total_input, stats.final_output
    ));
    lines.push(format!(
        "   • Superseded: {}   • Duplicates: {}   • Expired: {}",
        stats.superseded, stats.duplicates, stats.expired
    ));

    let mix: Vec<String> = Classification::ALL
        .iter()
        .filter(|c| stats.classification_count(**c) > 0)
        .map(|c| format!("{} {}", c.tag(), stats.classification_count(*c)))
        .collect();
    if !mix.is_empty() {
        lines.push(format!("   • Classification: {}", mix.join(", ")));
    }

    let problems = stats.structural_failures + stats.unresolved_dates + stats.unknown_timezones;
    if problems > 0 || stats.inverted_windows > 0 {
        lines.push(format!(
            "{}",
            format!(
                "⚠️  Structural failures: {}  Unresolved dates: {}  Unknown timezones: {}  Inverted windows: {}",
                stats.structural_failures,
                stats.unresolved_dates,
                stats.unknown_timezones,
                stats.inverted_windows
            )
            .yellow()
        ));
    }

    lines.join("\n")
}

fn render_record_line(record: &NormalizedNotam, now: DateTime<Utc>) -> String {
    let from = record
        .valid_from
        .as_ref()
        .map(crate::app::models::format_utc)
        .unwrap_or_else(|| "?".to_string());
    let to = record
        .valid_to
        .map(|v| v.to_output_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{} {:<17} {:<10} {:<5} {} -> {} [{}]  {}",
        record.number_or_na().bright_cyan(),
        colorize_classification(record.classification),
        record.source.label(),
        record.aerodrome().unwrap_or("-"),
        from,
        to,
        status_label(record.time_status(now)),
        first_line(record.summary())
    )
}

fn colorize_classification(classification: Classification) -> ColoredString {
    let tag = classification.tag();
    match classification {
        Classification::Cancelled => tag.bright_black(),
        Classification::Navaid => tag.bright_red().bold(),
        Classification::SurfaceCondition | Classification::FrictionIndex => tag.bright_yellow(),
        Classification::Runway => tag.red(),
        Classification::Taxiway => tag.yellow(),
        Classification::Fuel => tag.blue(),
        Classification::Other => tag.normal(),
    }
}

fn status_label(status: TimeStatus) -> &'static str {
    match status {
        TimeStatus::Upcoming => "upcoming",
        TimeStatus::Active => "active",
        TimeStatus::Permanent => "permanent",
        TimeStatus::Expired => "expired",
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}
