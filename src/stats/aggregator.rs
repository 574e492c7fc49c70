//! Lock-free aggregation of worker results
//!
//! [`GlobalState`] is the only state shared between workers. Each worker hands
//! its [`LocalResult`] to [`GlobalState::merge`] once, from its own thread, in
//! any order. All updates go through atomic add and compare-and-swap; there is
//! no lock on the merge path.
//!
//! # Merge strategies
//!
//! - **Slotwise** (default): slot `i` of the global list becomes the maximum
//!   of slot `i` across all local lists. Slot 0 is always the global maximum,
//!   but slots 1-9 are not necessarily the true 2nd-10th largest primes when
//!   several workers contribute large primes.
//! - **Exact**: every local list is also queued on a lock-free queue and
//!   [`GlobalState::finalize`] selects the true ten largest candidates.
//!
//! # Example
//!
//! ```
//! use primesweep::stats::LocalResult;
//! use primesweep::stats::aggregator::{GlobalState, MergeStrategy};
//!
//! let global = GlobalState::new(MergeStrategy::Slotwise);
//!
//! let mut a = LocalResult::new();
//! a.record_prime(2);
//! a.record_prime(3);
//! let mut b = LocalResult::new();
//! b.record_prime(5);
//!
//! global.merge(&a);
//! global.merge(&b);
//!
//! let totals = global.finalize();
//! assert_eq!(totals.count, 3);
//! assert_eq!(totals.sum, 10);
//! assert_eq!(totals.top[0], 5);
//! ```

use super::{insert_top, AlignedCounter, LocalResult, TOP_N};
use crossbeam::queue::SegQueue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How local top lists are folded into the global one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Position-by-position maximum (approximate beyond slot 0)
    Slotwise,
    /// True top-N over all local candidates, selected at finalize
    Exact,
}

impl Default for MergeStrategy {
    fn default() -> Self {
        Self::Slotwise
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slotwise => write!(f, "slotwise"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Snapshot of the aggregated totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeTotals {
    /// Total number of primes
    pub count: i64,
    /// Sum of all primes
    pub sum: i64,
    /// Largest primes, descending, zero-padded
    pub top: [i64; TOP_N],
    /// Number of local results merged
    pub merges: usize,
}

/// Process-wide aggregate shared by all workers
#[derive(Debug)]
pub struct GlobalState {
    strategy: MergeStrategy,
    total_sum: AlignedCounter,
    total_count: AlignedCounter,
    top: [AlignedCounter; TOP_N],
    /// Local top lists kept for exact selection (empty in slotwise mode)
    candidates: SegQueue<[i64; TOP_N]>,
    merges: AtomicUsize,
}

impl GlobalState {
    /// Create an empty global state
    pub fn new(strategy: MergeStrategy) -> Self {
        Self {
            strategy,
            total_sum: AlignedCounter::new(),
            total_count: AlignedCounter::new(),
            top: std::array::from_fn(|_| AlignedCounter::new()),
            candidates: SegQueue::new(),
            merges: AtomicUsize::new(0),
        }
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Merge one worker's result
    ///
    /// Safe to call concurrently from any number of threads.
    pub fn merge(&self, local: &LocalResult) {
        self.merge_totals(local.sum, local.count);
        self.merge_top(&local.top);
        if self.strategy == MergeStrategy::Exact {
            self.candidates.push(local.top);
        }
        self.merges.fetch_add(1, Ordering::Relaxed);
    }

    /// Atomically add a local sum and count to the totals
    pub fn merge_totals(&self, sum: i64, count: i64) {
        self.total_sum.add(sum);
        self.total_count.add(count);
    }

    /// Slot-wise maximum merge of a local top list
    ///
    /// Each global slot is raised to the local value at the same position if
    /// the local value is strictly greater. Returns true if any slot changed,
    /// so merging the same list a second time returns false.
    pub fn merge_top(&self, local_top: &[i64; TOP_N]) -> bool {
        let mut changed = false;
        for (slot, &candidate) in self.top.iter().zip(local_top.iter()) {
            changed |= slot.raise_to(candidate);
        }
        changed
    }

    /// Number of local results merged so far
    pub fn num_merges(&self) -> usize {
        self.merges.load(Ordering::Relaxed)
    }

    /// Current slot-wise view of the state
    pub fn snapshot(&self) -> PrimeTotals {
        PrimeTotals {
            count: self.total_count.get(),
            sum: self.total_sum.get(),
            top: std::array::from_fn(|i| self.top[i].get()),
            merges: self.num_merges(),
        }
    }

    /// Finalize once every worker has merged
    ///
    /// In exact mode the top list is rebuilt from all queued candidates.
    pub fn finalize(self) -> PrimeTotals {
        let mut totals = self.snapshot();
        if self.strategy == MergeStrategy::Exact {
            totals.top = select_top(std::iter::from_fn(|| self.candidates.pop()));
        }
        totals
    }
}

/// Select the true top-N values from a set of local top lists
///
/// Zero padding is ignored and equal values are kept once, since disjoint
/// ranges never report the same prime twice.
pub fn select_top<I>(lists: I) -> [i64; TOP_N]
where
    I: IntoIterator<Item = [i64; TOP_N]>,
{
    let mut top = [0; TOP_N];
    for list in lists {
        for value in list {
            if value > 0 && !top.contains(&value) {
                insert_top(&mut top, value);
            }
        }
    }
    top
}
