//! Date command: normalize a single date token

use super::shared::{RunStats, setup_logging};
use crate::Result;
use crate::app::services::datetime_normalizer::{DateOutcome, DateTimeNormalizer};
use crate::cli::args::{DateArgs, OutputFormat};
use colored::*;
use serde_json::json;
use std::time::Instant;

/// Date command runner
pub async fn run_date(args: DateArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging("warn", false)?;

    let normalizer = DateTimeNormalizer::new(args.year_pivot);
    let outcome = normalizer.normalize_detailed(&args.token);

    println!("{}", render_outcome(&args.token, &outcome, args.output_format));

    Ok(RunStats {
        records_read: 1,
        records_written: usize::from(outcome.value.is_some()),
        quality_issues: usize::from(outcome.unknown_timezone.is_some()),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Render a normalized token
pub fn render_outcome(token: &str, outcome: &DateOutcome, format: OutputFormat) -> String {
    let value = outcome.value.map(|v| v.to_output_string());

    match format {
        OutputFormat::Human => {
            let mut line = match &value {
                Some(value) => format!("{} -> {}", token, value.bright_green()),
                None => format!("{} -> {}", token, "unparseable".bright_red()),
            };
            if let Some(code) = &outcome.unknown_timezone {
                line.push_str(&format!(" (unknown timezone '{}', UTC assumed)", code));
            }
            line
        }
        _ => json!({
            "token": token,
            "value": value,
            "unknownTimezone": outcome.unknown_timezone,
        })
        .to_string(),
    }
}
