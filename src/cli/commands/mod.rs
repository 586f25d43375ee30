//! Command implementations for the NOTAM processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module.

pub mod date;
pub mod process;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the NOTAM processor
///
/// Dispatches to the subcommand handler:
/// - `process`: normalize, merge and emit records
/// - `validate`: report data-quality notes per NOTAM
/// - `date`: normalize a single date token
pub async fn run(args: Args) -> Result<RunStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        Some(Commands::Date(date_args)) => date::run_date(date_args).await,
        None => Err(Error::configuration("No command given")),
    }
}
