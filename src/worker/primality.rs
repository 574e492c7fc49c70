//! Trial-division primality test

/// Inclusive upper bound for trial division of `n`
///
/// Derived from a floating-point square root and truncated, so for perfect
/// squares the root itself is included in the loop.
#[inline]
pub fn trial_bound(n: i64) -> i64 {
    (n as f64).sqrt() as i64
}

/// Check whether `n` is prime
///
/// Values `<= 1` are never prime. Otherwise `n` is prime iff no integer in
/// `[2, floor(sqrt(n))]` divides it.
///
/// # Examples
///
/// ```
/// use primesweep::worker::primality::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(25));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let bound = trial_bound(n);
    let mut i = 2;
    while i <= bound {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
