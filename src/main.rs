//! pdfsplit - split PDF documents into pages, or merge them into one.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use pdfsplit::cli::Cli;
use pdfsplit::error::{PAGE_FAILURE_EXIT_CODE, PdfSplitError};
use pdfsplit::output::{OutputFormatter, print_json_report};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::from_cli(&cli);

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(err) => {
            formatter.error(&format!("Error: {err:#}"));
            let code = err
                .downcast_ref::<PdfSplitError>()
                .map_or(1, PdfSplitError::exit_code);
            process::exit(code);
        }
    }
}

/// Main application logic. Returns the process exit code.
async fn run(cli: Cli) -> Result<i32> {
    let config = cli
        .resolve_config()
        .await
        .context("Invalid command line")?;

    let formatter = OutputFormatter::from_config(&config);

    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfsplit::NAME, pdfsplit::VERSION));
        formatter.blank_line();
    }

    if config.dry_run {
        formatter.info("Dry run - no files will be written");
    }

    for input in &config.inputs {
        formatter.debug(&format!("Input: {}", input.display()));
    }

    // Fatal errors are printed by the formatter as they happen.
    let report = match pdfsplit::run(&config, formatter.clone()).await {
        Ok(report) => report,
        Err(err) => return Ok(err.exit_code()),
    };

    if config.json {
        print_json_report(&report)?;
    }

    if report.is_clean() {
        Ok(0)
    } else {
        Ok(PAGE_FAILURE_EXIT_CODE)
    }
}
