//! Prime statistics
//!
//! Per-worker results and the lock-free counters used to aggregate them.
//!
//! - **LocalResult**: Sum, count and top-10 list of one scanned range
//! - **Top-N insertion**: Fixed-capacity descending list, zero-padded
//! - **Atomic counters**: Cache-line aligned, lock-free updates
//!
//! # Example
//!
//! ```
//! use primesweep::stats::LocalResult;
//!
//! let mut local = LocalResult::new();
//! local.record_prime(2);
//! local.record_prime(3);
//! local.record_prime(5);
//!
//! assert_eq!(local.count, 3);
//! assert_eq!(local.sum, 10);
//! assert_eq!(local.top[..4], [5, 3, 2, 0]);
//! ```

pub mod aggregator;

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Number of largest primes tracked per worker and globally
pub const TOP_N: usize = 10;

/// Cache-line aligned atomic counter to prevent false sharing
///
/// Every global slot is updated by all workers, so each one gets its own
/// cache line.
///
/// # Memory Layout
///
/// ```text
/// [value: 8 bytes][padding: 56 bytes] = 64 bytes total
/// ```
#[repr(align(64))]
#[derive(Debug)]
pub struct AlignedCounter {
    value: AtomicI64,
    _padding: [u8; 56],
}

impl AlignedCounter {
    /// Create a new counter with initial value 0
    pub fn new() -> Self {
        Self::with_value(0)
    }

    /// Create a new counter with the specified initial value
    pub fn with_value(val: i64) -> Self {
        Self {
            value: AtomicI64::new(val),
            _padding: [0; 56],
        }
    }

    /// Add to the counter
    ///
    /// Uses `Ordering::Relaxed`; totals are only read after every worker joined.
    #[inline]
    pub fn add(&self, val: i64) {
        self.value.fetch_add(val, Ordering::Relaxed);
    }

    /// Get the current value of the counter
    #[inline]
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Raise the counter to `candidate` if it is strictly greater
    ///
    /// Compare-and-swap loop: a failed exchange re-reads the slot, so a
    /// concurrent larger write is never overwritten by a stale read.
    /// Returns true if the stored value changed.
    #[inline]
    pub fn raise_to(&self, candidate: i64) -> bool {
        let mut current = self.value.load(Ordering::Acquire);
        while candidate > current {
            match self.value.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(x) => current = x,
            }
        }
        false
    }
}

impl Default for AlignedCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert `value` into a descending, zero-padded top-N list
///
/// Slots are scanned from the largest. At the first slot holding a smaller
/// value, that slot and all following ones shift right by one (the smallest
/// entry falls off) and `value` is stored there. A value not larger than any
/// entry is dropped. Returns true if the value was inserted.
pub fn insert_top(top: &mut [i64; TOP_N], value: i64) -> bool {
    match top.iter().position(|&slot| value > slot) {
        Some(i) => {
            top.copy_within(i..TOP_N - 1, i + 1);
            top[i] = value;
            true
        }
        None => false,
    }
}

/// Result of scanning one range
///
/// Owned by the worker that produced it until handed to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalResult {
    /// Sum of primes found
    pub sum: i64,
    /// Number of primes found
    pub count: i64,
    /// Largest primes found, descending, zero-padded
    pub top: [i64; TOP_N],
}

impl LocalResult {
    /// Create an empty result (zero sum, zero count, ten zeros)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prime: add to the sum, bump the count, offer it to the top list
    #[inline]
    pub fn record_prime(&mut self, prime: i64) {
        // Wraps like the shared atomic totals
        self.sum = self.sum.wrapping_add(prime);
        self.count += 1;
        insert_top(&mut self.top, prime);
    }

    /// Largest prime recorded, or 0 if none
    pub fn largest(&self) -> i64 {
        self.top[0]
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
