//! Plain-text output
//!
//! The results file has exactly two lines:
//!
//! ```text
//! <elapsedSeconds> <primeCount> <sumOfPrimes>
//! <p0> <p1> ... <p9>
//! ```
//!
//! with the ten largest primes in descending order.

use crate::coordinator::RunReport;
use crate::util::time::{calculate_rate, format_rate};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the two-line results file contents
pub fn format_results(report: &RunReport) -> String {
    let top = report
        .totals
        .top
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {} {}\n{}\n",
        report.elapsed_seconds, report.totals.count, report.totals.sum, top
    )
}

/// Write the results file, replacing any existing file
pub fn write_results_file(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create results file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(format_results(report).as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;

    Ok(())
}

/// Print run results to console
pub fn print_results(report: &RunReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                    SCAN RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Elapsed Time: {:.3}s", report.elapsed_seconds);
    println!();

    let rate = calculate_rate(report.scanned(), report.elapsed_seconds);

    println!("Range:");
    println!("  Numbers: {} ({})", format_number(report.scanned()), report.range);
    println!("  Workers: {}", report.threads);
    println!("  Rate:    {} numbers/s", format_rate(rate));
    println!();

    println!("Primes:");
    println!("  Count: {}", format_number(report.totals.count));
    println!("  Sum:   {}", format_number(report.totals.sum));
    println!();

    println!("Largest Primes ({} merge):", report.strategy);
    for (i, p) in report.totals.top.iter().enumerate().filter(|(_, p)| **p > 0) {
        println!("  {:>2}. {}", i + 1, format_number(*p));
    }
    if report.totals.top[0] == 0 {
        println!("  No primes in range");
    }
    println!();

    println!("═══════════════════════════════════════════════════════════");
}

/// Format a number with thousands separators
fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}
