//! Worker implementation
//!
//! A worker scans one contiguous [`Range`] with trial division and produces a
//! [`LocalResult`]. Workers never touch shared state; the coordinator hands
//! each result to the aggregator after the scan returns.
//!
//! # Example
//!
//! ```
//! use primesweep::worker::{Range, Worker};
//!
//! let worker = Worker::new(0, Range::new(2, 100));
//! let result = worker.run();
//!
//! assert_eq!(result.count, 25);
//! assert_eq!(result.sum, 1060);
//! assert_eq!(result.top[0], 97);
//! ```

pub mod partition;
pub mod primality;

use crate::stats::LocalResult;
use primality::is_prime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive integer range `[start, end]`
///
/// A range with `start > end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of integers in the range (0 when empty)
    pub fn len(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Scan every integer of `range` and collect its primes
///
/// An empty range yields a zero-valued result.
pub fn scan_range(range: Range) -> LocalResult {
    let mut result = LocalResult::new();
    if range.is_empty() {
        return result;
    }

    for n in range.start..=range.end {
        if is_prime(n) {
            result.record_prime(n);
        }
    }
    result
}

/// Prime scanner bound to one range
///
/// # Lifecycle
///
/// 1. **Creation**: `Worker::new()` binds an id and a range
/// 2. **Execution**: `run()` scans the range to completion
/// 3. **Completion**: Returns the `LocalResult` for the aggregator
#[derive(Debug, Clone, Copy)]
pub struct Worker {
    /// Worker ID (position of the range in the partition)
    id: usize,

    /// Range this worker scans
    range: Range,
}

impl Worker {
    pub fn new(id: usize, range: Range) -> Self {
        Self { id, range }
    }

    /// Scan the assigned range
    ///
    /// Pure CPU work with no suspension points and no side effects.
    pub fn run(&self) -> LocalResult {
        scan_range(self.range)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn range(&self) -> Range {
        self.range
    }
}
