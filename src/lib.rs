//! primesweep - Parallel prime counting over an integer range
//!
//! primesweep partitions an integer range into contiguous chunks, scans each
//! chunk on a fixed-size worker pool, and aggregates the prime count, the prime
//! sum and the ten largest primes into lock-free shared state.
//!
//! # Architecture
//!
//! - **Partitioning**: Contiguous, disjoint sub-ranges, last one absorbs the remainder
//! - **Workers**: Trial-division scanners with a local top-10 list
//! - **Aggregation**: Atomic add and compare-and-swap merge into global state
//! - **Output**: Two-line results file, console summary, optional JSON summary

pub mod config;
pub mod coordinator;
pub mod output;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use stats::{LocalResult, TOP_N};
pub use worker::Range;

/// Result type used throughout primesweep
pub type Result<T> = anyhow::Result<T>;
