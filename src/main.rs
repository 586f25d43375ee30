use clap::Parser;
use notam_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(notam_processor::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - output has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NOTAM Processor - ICAO NOTAM Normalizer");
    println!("=======================================");
    println!();
    println!("Parse raw FAA and NAV CANADA NOTAM text into normalized records with");
    println!("UTC validity windows, display classification and cancellation handling.");
    println!();
    println!("USAGE:");
    println!("    notam-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Normalize, merge and emit a batch of NOTAMs (main command)");
    println!("    validate    Report data-quality issues per NOTAM");
    println!("    date        Normalize a single date token");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize a JSON batch and print a human summary:");
    println!("    notam-processor process -i notams.json");
    println!();
    println!("    # Raw NAV CANADA text files to JSON lines, dropping expired NOTAMs:");
    println!("    notam-processor process -i 'feeds/*.txt' --source NAV_CANADA \\");
    println!("                            --output-format jsonl --exclude-expired -o current.jsonl");
    println!();
    println!("    # Check a single date token:");
    println!("    notam-processor date 2501312359EST");
    println!();
    println!("For detailed help on any command, use:");
    println!("    notam-processor <COMMAND> --help");
}
