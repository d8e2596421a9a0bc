//! Report rendering: human-readable and JSON modes.
//!
//! Human mode prints the three classic summary lines (mean, stddev,
//! confidence interval) with aligned `=` signs. JSON mode emits the
//! whole [`ExperimentReport`] as one pretty-printed object, including
//! the grid side and trial count.

use percolate_core::ExperimentReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Renders `report` to a `String` in the requested format.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if JSON serialization fails (not
/// expected for a report of plain numbers, but the error path is kept
/// total).
pub fn render_report(report: &ExperimentReport, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Human => Ok(render_human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(|e| CliError::IoError {
            source: "report".to_owned(),
            detail: e.to_string(),
        }),
    }
}

fn render_human(report: &ExperimentReport) -> String {
    format!(
        "mean                    = {}\n\
         stddev                  = {}\n\
         95% confidence interval = [{}, {}]",
        report.mean, report.stddev, report.confidence_lo, report.confidence_hi
    )
}
