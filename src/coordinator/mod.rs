//! Coordinator module
//!
//! Orchestrates workers and aggregates results.
//!
//! The coordinator partitions the configured range, builds a fixed-size
//! worker pool, dispatches one scan task per sub-range and blocks until every
//! task has finished. Each task merges its own result into the shared
//! [`GlobalState`] before returning its [`WorkerReport`], so the state is
//! complete once the pool returns. Reports come back ordered by worker id.

use crate::config::Config;
use crate::stats::aggregator::{GlobalState, MergeStrategy, PrimeTotals};
use crate::stats::LocalResult;
use crate::util::time::Timestamp;
use crate::worker::partition::partition;
use crate::worker::{Range, Worker};
use crate::Result;
use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of one worker, reported after the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    pub id: usize,
    pub range: Range,
    pub result: LocalResult,
}

/// Everything the reporters need about a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Whole range scanned
    pub range: Range,
    /// Worker pool size
    pub threads: usize,
    /// Top-10 merge strategy used
    pub strategy: MergeStrategy,
    /// Wall-clock seconds at millisecond resolution
    pub elapsed_seconds: f64,
    /// Aggregated totals
    pub totals: PrimeTotals,
    /// Per-worker results, ordered by worker id
    pub workers: Vec<WorkerReport>,
}

impl RunReport {
    /// Number of integers scanned
    pub fn scanned(&self) -> i64 {
        self.range.len()
    }
}

/// Run a full scan as described by `config`
///
/// # Errors
///
/// Fails if the range cannot be partitioned or the worker pool cannot be
/// built. Scanning itself cannot fail.
pub fn run(config: &Config) -> Result<RunReport> {
    let debug = config.runtime.debug;
    let threads = config.workers.threads;
    let range = Range::new(config.range.start, config.range.end);

    let start_time = Timestamp::now();

    let ranges = partition(range.start, range.end, threads)
        .context("Failed to partition range")?;

    let pool_start = Timestamp::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("primesweep-worker-{}", i))
        .build()
        .context("Failed to build worker pool")?;
    if debug {
        eprintln!("DEBUG TIMING: Pool build: {:.3}s", pool_start.elapsed().as_secs_f64());
    }

    let global = GlobalState::new(config.runtime.merge);

    // One task per range; install returns once every task has completed
    let workers: Vec<WorkerReport> = pool.install(|| {
        ranges
            .par_iter()
            .enumerate()
            .map(|(id, &range)| {
                let worker = Worker::new(id, range);
                let result = worker.run();
                global.merge(&result);
                WorkerReport { id: worker.id(), range: worker.range(), result }
            })
            .collect()
    });

    let elapsed_seconds = start_time.elapsed_seconds();

    if global.num_merges() != ranges.len() {
        anyhow::bail!(
            "only {} of {} workers merged their results",
            global.num_merges(),
            ranges.len()
        );
    }

    if debug {
        for w in &workers {
            eprintln!(
                "DEBUG: Worker {} {}: {} primes, sum {}, largest {}",
                w.id,
                w.range,
                w.result.count,
                w.result.sum,
                w.result.largest()
            );
        }
    }

    Ok(RunReport {
        range,
        threads,
        strategy: global.strategy(),
        elapsed_seconds,
        totals: global.finalize(),
        workers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TOP_N;

    fn test_config(start: i64, end: i64, threads: usize) -> Config {
        let mut config = Config::default();
        config.range.start = start;
        config.range.end = end;
        config.workers.threads = threads;
        config
    }

    #[test]
    fn test_run_2_to_100() {
        let report = run(&test_config(2, 100, 8)).unwrap();
        assert_eq!(report.totals.count, 25);
        assert_eq!(report.totals.sum, 1060);
        assert_eq!(report.totals.top[0], 97);
        assert_eq!(report.totals.merges, 8);
        assert_eq!(report.workers.len(), 8);
        assert_eq!(report.scanned(), 99);
    }

    #[test]
    fn test_run_2_to_100_exact() {
        let mut config = test_config(2, 100, 8);
        config.runtime.merge = MergeStrategy::Exact;

        let report = run(&config).unwrap();
        assert_eq!(report.strategy, MergeStrategy::Exact);
        assert_eq!(report.totals.top, [97, 89, 83, 79, 73, 71, 67, 61, 59, 53]);
    }

    #[test]
    fn test_run_2_to_100_slotwise_keeps_slot_maxima() {
        // Worker tops for 8 ranges: slot 2 only ever sees 7, 17, 29, 41, 53, 67
        let report = run(&test_config(2, 100, 8)).unwrap();
        assert_eq!(report.strategy, MergeStrategy::Slotwise);
        assert_eq!(report.totals.top, [97, 89, 67, 5, 3, 2, 0, 0, 0, 0]);
        assert_eq!(
            crate::output::text::format_results(&report).lines().nth(1),
            Some("97 89 67 5 3 2 0 0 0 0")
        );
    }

    #[test]
    fn test_run_2_to_100_slotwise_single_worker() {
        let report = run(&test_config(2, 100, 1)).unwrap();
        assert_eq!(report.strategy, MergeStrategy::Slotwise);
        assert_eq!(report.totals.top, [97, 89, 83, 79, 73, 71, 67, 61, 59, 53]);
    }

    #[test]
    fn test_run_2_to_10_single_worker() {
        let report = run(&test_config(2, 10, 1)).unwrap();
        assert_eq!(report.totals.count, 4);
        assert_eq!(report.totals.sum, 17);
        assert_eq!(report.totals.top, [7, 5, 3, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_run_more_workers_than_numbers() {
        let report = run(&test_config(2, 4, 6)).unwrap();
        assert_eq!(report.totals.count, 2);
        assert_eq!(report.totals.sum, 5);
        assert_eq!(report.workers.len(), 6);
        assert!(report.workers[..5].iter().all(|w| w.result == LocalResult::new()));
    }

    #[test]
    fn test_workers_ordered_and_cover_range() {
        let report = run(&test_config(2, 1000, 4)).unwrap();
        let ids: Vec<usize> = report.workers.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        let count: i64 = report.workers.iter().map(|w| w.result.count).sum();
        let sum: i64 = report.workers.iter().map(|w| w.result.sum).sum();
        assert_eq!(count, report.totals.count);
        assert_eq!(sum, report.totals.sum);
        assert_eq!(report.workers[3].range.end, 1000);
    }

    #[test]
    fn test_thread_count_does_not_change_totals() {
        let baseline = run(&test_config(2, 20_000, 1)).unwrap();
        for threads in [2, 3, 8, 16] {
            let report = run(&test_config(2, 20_000, threads)).unwrap();
            assert_eq!(report.totals.count, baseline.totals.count);
            assert_eq!(report.totals.sum, baseline.totals.sum);
            assert_eq!(report.totals.top[0], baseline.totals.top[0]);
        }
    }

    #[test]
    fn test_run_zero_threads_fails() {
        assert!(run(&test_config(2, 100, 0)).is_err());
    }

    #[test]
    fn test_top_is_descending() {
        let report = run(&test_config(2, 50_000, 8)).unwrap();
        let top = report.totals.top;
        assert!(top.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(top.len(), TOP_N);
    }
}
