//! Range partitioning
//!
//! Splits an inclusive integer range into one contiguous sub-range per worker.
//! Every worker except the last gets `floor(len / num_workers)` integers; the
//! last sub-range always ends at the overall end and absorbs the remainder.

use super::Range;
use thiserror::Error;

/// Errors returned by [`partition`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("number of workers must be at least 1")]
    NoWorkers,

    #[error("range start ({start}) is greater than range end ({end})")]
    InvertedRange { start: i64, end: i64 },
}

/// Partition `[start, end]` into `num_workers` sub-ranges
///
/// The returned ranges are ordered by increasing start, pairwise disjoint, and
/// their union is exactly `[start, end]`. When `num_workers` exceeds the number
/// of integers in the range, the leading sub-ranges are empty.
///
/// # Examples
///
/// ```
/// use primesweep::worker::partition::partition;
///
/// let ranges = partition(2, 11, 3).unwrap();
/// assert_eq!(ranges.len(), 3);
/// assert_eq!((ranges[0].start, ranges[0].end), (2, 4));
/// assert_eq!((ranges[2].start, ranges[2].end), (8, 11));
/// ```
pub fn partition(start: i64, end: i64, num_workers: usize) -> Result<Vec<Range>, PartitionError> {
    if num_workers == 0 {
        return Err(PartitionError::NoWorkers);
    }
    if start > end {
        return Err(PartitionError::InvertedRange { start, end });
    }

    let workers = num_workers as i64;
    let chunk = (end - start + 1) / workers;

    let ranges = (0..workers)
        .map(|i| {
            let chunk_start = start + i * chunk;
            let chunk_end = if i == workers - 1 {
                end
            } else {
                chunk_start + chunk - 1
            };
            Range::new(chunk_start, chunk_end)
        })
        .collect();

    Ok(ranges)
}
