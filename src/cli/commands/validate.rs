//! Validate command implementation for the NOTAM processor CLI
//!
//! Runs every NOTAM through extraction, date resolution and classification
//! without merging, and reports the data-quality notes raised for each one.

use super::shared::{RunStats, create_progress_bar, render_json, setup_logging, write_output};
use crate::Result;
use crate::app::models::NormalizedNotam;
use crate::app::services::record_processor::{NotamProcessor, ProcessingStats};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::cli::input::{load_inputs, resolve_input_paths};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Per-record validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFinding {
    pub id: String,
    pub number: String,
    pub source: String,
    pub issues: Vec<String>,
}

impl From<&NormalizedNotam> for ValidationFinding {
    fn from(record: &NormalizedNotam) -> Self {
        Self {
            id: record.id.clone(),
            number: record.number_or_na().to_string(),
            source: record.source.label().to_string(),
            issues: record.quality.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Validate command runner for the NOTAM processor
pub async fn run_validate(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting NOTAM validation");
    debug!("Validation arguments: {:?}", args);

    args.validate()?;

    let files = resolve_input_paths(&args.inputs)?;
    let inputs = load_inputs(&files, args.source).await?;
    let processor = NotamProcessor::new(args.to_config());

    let progress_bar = args
        .show_progress()
        .then(|| create_progress_bar(inputs.len() as u64, "Validating NOTAMs"));

    let (findings, stats) = validate_records(&processor, &inputs, progress_bar.as_ref());

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Validation complete");
    }

    let rendered = match args.output_format {
        OutputFormat::Human => {
            if args.output_file.is_some() {
                colored::control::set_override(false);
            }
            render_human_report(&findings, &stats)
        }
        format => render_json(&findings, format)?,
    };
    write_output(&rendered, args.output_file.as_deref()).await?;

    let run_stats = RunStats {
        files_read: files.len(),
        records_read: inputs.len(),
        records_written: findings.len(),
        quality_issues: findings.iter().map(|f| f.issues.len()).sum(),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Validation completed: {} NOTAMs, {} with data-quality notes ({:.1}% structured)",
        stats.total_input,
        findings.len(),
        stats.success_rate()
    );

    Ok(run_stats)
}

/// Normalize each record independently and collect findings for those with notes
pub fn validate_records(
    processor: &NotamProcessor,
    inputs: &[crate::app::models::NotamInput],
    progress_bar: Option<&indicatif::ProgressBar>,
) -> (Vec<ValidationFinding>, ProcessingStats) {
    let mut stats = ProcessingStats::new();
    stats.total_input = inputs.len();
    let mut findings = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let record = processor.process_record(input);
        stats.record_quality(&record);
        if !record.quality.is_empty() {
            findings.push(ValidationFinding::from(&record));
        }

        if let Some(pb) = progress_bar {
            pb.set_position(index as u64 + 1);
        }
    }

    (findings, stats)
}

fn render_human_report(findings: &[ValidationFinding], stats: &ProcessingStats) -> String {
    let mut lines = Vec::new();

    if findings.is_empty() {
        lines.push(format!("{}", "✅ No data-quality issues found".bright_green().bold()));
    }

    for finding in findings {
        lines.push(format!(
            "{} {} ({})",
            "⚠️ ".yellow(),
            finding.number.bright_cyan(),
            finding.id
        ));
        for issue in &finding.issues {
            lines.push(format!("     • {}", issue));
        }
    }

    lines.push(String::new());
    lines.push(format!("{}", "NOTAM Validation Summary".bright_green().bold()));
    lines.push(format!(
        "   • NOTAMs checked: {}   • Structured: {} ({:.1}%)",
        stats.total_input,
        stats.structured,
        stats.success_rate()
    ));
    lines.push(format!(
        "   • Structural failures: {}   • Unresolved dates: {}   • Unknown timezones: {}",
        stats.structural_failures, stats.unresolved_dates, stats.unknown_timezones
    ));
    lines.push(format!(
        "   • Inverted windows: {}   • Date source disagreements: {}",
        stats.inverted_windows, stats.date_disagreements
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{NotamInput, Source};
    use crate::config::ProcessorConfig;

    #[test]
    fn test_validate_records_reports_only_problem_records() {
        let processor = NotamProcessor::new(ProcessorConfig::default());
        let inputs = vec![
            NotamInput::new(
                "A0001/25 NOTAMN\nA) KJFK B) 2501010000 C) 2501312359\nE) RWY 04L CLSD",
                Source::Faa,
            ),
            NotamInput::new(
                "A0002/25 NOTAMN\nA) KJFK B) 2502011200 C) 2502301200\nE) RWY 04R CLSD",
                Source::Faa,
            ),
        ];

        let (findings, stats) = validate_records(&processor, &inputs, None);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].number, "A0002/25");
        assert_eq!(findings[0].issues, vec!["unparseable C) date '2502301200'"]);
        assert_eq!(stats.total_input, 2);
        assert_eq!(stats.unresolved_dates, 1);
    }

    #[test]
    fn test_human_report_without_findings() {
        colored::control::set_override(false);
        let report = render_human_report(&[], &ProcessingStats::new());
        assert!(report.starts_with("✅ No data-quality issues found"));
    }
}
