//! Timing utilities
//!
//! Wall-clock timing for a run. The reported elapsed time is whole
//! milliseconds divided by 1000, so runs shorter than a millisecond read as 0.

use std::time::{Duration, Instant};

/// Wall-clock timestamp for measuring a run
///
/// Thin wrapper around `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: Instant,
}

impl Timestamp {
    /// Create a new timestamp representing the current time
    #[inline]
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    /// Get the elapsed time since this timestamp
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }

    /// Get the elapsed time in whole milliseconds
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Elapsed seconds at millisecond resolution
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        millis_to_seconds(self.elapsed_millis())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

/// Convert a millisecond count to fractional seconds
///
/// # Examples
///
/// ```
/// use primesweep::util::time::millis_to_seconds;
///
/// assert_eq!(millis_to_seconds(1500), 1.5);
/// assert_eq!(millis_to_seconds(0), 0.0);
/// ```
pub fn millis_to_seconds(millis: u64) -> f64 {
    millis as f64 / 1000.0
}

/// Format a rate (numbers per second)
///
/// # Examples
///
/// ```
/// use primesweep::util::time::format_rate;
///
/// assert_eq!(format_rate(500.0), "500");
/// assert_eq!(format_rate(1500.0), "1.50K");
/// assert_eq!(format_rate(2_500_000.0), "2.50M");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate < 1_000.0 {
        format!("{:.0}", rate)
    } else if rate < 1_000_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else if rate < 1_000_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else {
        format!("{:.2}G", rate / 1_000_000_000.0)
    }
}

/// Numbers scanned per second
///
/// Returns 0 for a zero elapsed time.
pub fn calculate_rate(scanned: i64, seconds: f64) -> f64 {
    if seconds > 0.0 {
        scanned as f64 / seconds
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timestamp_elapsed() {
        let start = Timestamp::now();
        thread::sleep(Duration::from_millis(10));
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_timestamp_elapsed_seconds_resolution() {
        let start = Timestamp::now();
        thread::sleep(Duration::from_millis(20));
        let seconds = start.elapsed_seconds();

        assert!(seconds >= 0.02);
    }

    #[test]
    fn test_millis_to_seconds() {
        assert_eq!(millis_to_seconds(0), 0.0);
        assert_eq!(millis_to_seconds(1), 0.001);
        assert_eq!(millis_to_seconds(12_345), 12.345);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(500.0), "500");
        assert_eq!(format_rate(1500.0), "1.50K");
        assert_eq!(format_rate(1_500_000.0), "1.50M");
        assert_eq!(format_rate(1_500_000_000.0), "1.50G");
    }

    #[test]
    fn test_calculate_rate() {
        assert_eq!(calculate_rate(1000, 10.0), 100.0);
        assert_eq!(calculate_rate(1000, 0.0), 0.0);
    }
}
