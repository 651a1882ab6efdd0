//! Load Test Report Generator - Main CLI Application
//!
//! Reads a k6 summary export and writes the Markdown load-test report.

use clap::Parser;
use loadtest_report::{
    app::App,
    cli::Cli,
    error::{AppError, ErrorReporter},
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose || cli.debug);

    if let Err(e) = App::new(cli).and_then(App::run) {
        eprintln!("Error: {}", reporter.render(&e));

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Io(_) => {
            eprintln!();
            eprintln!("File help:");
            eprintln!("  - Run k6 with --summary-export=<path> to produce the summary file");
            eprintln!("  - Pass the summary and report paths as arguments");
            eprintln!("  - The report directory must already exist");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Summary help:");
            eprintln!("  - The summary must be a JSON object, not the k6 console output");
            eprintln!("  - Check that the k6 run finished and the file is complete");
        }
        AppError::Format(_) => {
            eprintln!();
            eprintln!("Rendering help:");
            eprintln!("  - Strict metrics are enabled and http_req_duration p(95) is missing");
            eprintln!("  - Drop --strict or unset STRICT_METRICS to report 0.00 ms instead");
        }
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - VU_COUNT and STOCK must be non-negative integers");
            eprintln!("  - STRICT_METRICS and ENABLE_COLOR take true/false, 1/0, yes/no or on/off");
        }
        AppError::Internal(_) => {}
    }
}
