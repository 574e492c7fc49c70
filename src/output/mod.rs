//! Output formatting
//!
//! - **text**: Two-line results file and console summary
//! - **json**: Optional JSON summary

pub mod json;
pub mod text;

use crate::config::OutputConfig;
use crate::coordinator::RunReport;

/// Emit every configured output for a finished run
///
/// Write failures are logged to stderr and not retried; the caller still
/// completes normally. Returns the number of outputs that failed.
pub fn emit_results(output: &OutputConfig, report: &RunReport) -> usize {
    let mut failures = 0;

    if let Err(e) = text::write_results_file(&output.results_path, report) {
        eprintln!("Error: {:#}", e);
        failures += 1;
    }

    if let Some(ref path) = output.json_output {
        let summary = json::JsonSummary::from_report(report);
        if let Err(e) = json::write_json_output(path, &summary, true) {
            eprintln!("Error: {:#}", e);
            failures += 1;
        }
    }

    if !output.quiet {
        text::print_results(report);
    }

    failures
}
