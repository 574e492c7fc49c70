//! JSON output formatting
//!
//! Machine-readable summary of a run: configuration, totals, the largest
//! primes and per-worker results.

use crate::coordinator::RunReport;
use crate::stats::aggregator::MergeStrategy;
use crate::worker::Range;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Per-worker entry of the JSON summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWorker {
    pub id: usize,
    pub range: Range,
    pub prime_count: i64,
    pub prime_sum: i64,
    pub largest_prime: i64,
}

/// Top-level JSON summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSummary {
    /// RFC 3339 time the summary was written
    pub generated_at: String,
    pub version: String,
    pub range: Range,
    pub threads: usize,
    pub merge: MergeStrategy,
    pub elapsed_seconds: f64,
    pub prime_count: i64,
    pub prime_sum: i64,
    /// Ten largest primes, descending, zero-padded
    pub largest_primes: Vec<i64>,
    pub workers: Vec<JsonWorker>,
}

impl JsonSummary {
    pub fn from_report(report: &RunReport) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            range: report.range,
            threads: report.threads,
            merge: report.strategy,
            elapsed_seconds: report.elapsed_seconds,
            prime_count: report.totals.count,
            prime_sum: report.totals.sum,
            largest_primes: report.totals.top.to_vec(),
            workers: report
                .workers
                .iter()
                .map(|w| JsonWorker {
                    id: w.id,
                    range: w.range,
                    prime_count: w.result.count,
                    prime_sum: w.result.sum,
                    largest_prime: w.result.largest(),
                })
                .collect(),
        }
    }
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, summary: &JsonSummary, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON file: {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, summary)?;
    } else {
        serde_json::to_writer(writer, summary)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::WorkerReport;
    use crate::stats::aggregator::PrimeTotals;
    use crate::stats::LocalResult;
    use tempfile::TempDir;

    fn sample_report() -> RunReport {
        let mut low = LocalResult::new();
        for p in [2, 3, 5, 7] {
            low.record_prime(p);
        }

        RunReport {
            range: Range::new(2, 12),
            threads: 2,
            strategy: MergeStrategy::Exact,
            elapsed_seconds: 0.002,
            totals: PrimeTotals {
                count: 5,
                sum: 28,
                top: [11, 7, 5, 3, 2, 0, 0, 0, 0, 0],
                merges: 2,
            },
            workers: vec![
                WorkerReport { id: 0, range: Range::new(2, 6), result: low },
                WorkerReport {
                    id: 1,
                    range: Range::new(7, 12),
                    result: LocalResult { sum: 18, count: 2, top: [11, 7, 0, 0, 0, 0, 0, 0, 0, 0] },
                },
            ],
        }
    }

    #[test]
    fn test_from_report() {
        let summary = JsonSummary::from_report(&sample_report());
        assert_eq!(summary.prime_count, 5);
        assert_eq!(summary.prime_sum, 28);
        assert_eq!(summary.largest_primes, vec![11, 7, 5, 3, 2, 0, 0, 0, 0, 0]);
        assert_eq!(summary.merge, MergeStrategy::Exact);
        assert_eq!(summary.workers.len(), 2);
        assert_eq!(summary.workers[1].largest_prime, 11);
        assert!(chrono::DateTime::parse_from_rfc3339(&summary.generated_at).is_ok());
    }

    #[test]
    fn test_write_json_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        let summary = JsonSummary::from_report(&sample_report());

        write_json_output(&path, &summary, true).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["prime_count"], 5);
        assert_eq!(value["merge"], "exact");
        assert_eq!(value["range"]["start"], 2);
        assert_eq!(value["workers"][0]["prime_sum"], 17);

        let parsed: JsonSummary = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_write_json_output_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("summary.json");
        let summary = JsonSummary::from_report(&sample_report());
        assert!(write_json_output(&path, &summary, false).is_err());
    }
}
