//! User-facing output: formatted status messages and the JSON report.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::assembly::AssemblyReport;
use crate::error::{PdfSplitError, Result};

/// Render a run report as pretty-printed JSON.
pub fn report_to_json(report: &AssemblyReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| PdfSplitError::other(format!("Failed to serialize report: {e}")))
}

/// Print a run report as JSON on stdout.
pub fn print_json_report(report: &AssemblyReport) -> Result<()> {
    println!("{}", report_to_json(report)?);
    Ok(())
}
