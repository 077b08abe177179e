//! Deterministic capacity targets.
//!
//! Table capacities are always drawn from [`PRIMES`], so growth never has to
//! test numbers for primality at runtime.

/// Ascending table of the primes a table capacity may take.
///
/// Each entry is roughly 1.2x the previous one.
pub const PRIMES: [usize; 50] = [
    3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631,
    761, 919, 1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103,
    12143, 14591, 17519, 21023, 25229, 30293, 36353, 43627, 52361, 62851, 75431, 90523, 108631,
    130363,
];

/// Smallest capacity a table is created with.
pub const MIN_PRIME: usize = PRIMES[0];

/// Largest capacity a table can grow to.
pub const MAX_PRIME: usize = PRIMES[PRIMES.len() - 1];

/// Returns the smallest table prime greater than or equal to `value`.
///
/// Requests above [`MAX_PRIME`] saturate to [`MAX_PRIME`]; tables cannot grow
/// past it.
///
/// # Examples
///
/// ```rust
/// use prime_chain::primes::next_prime;
///
/// assert_eq!(next_prime(0), 3);
/// assert_eq!(next_prime(100), 107);
/// assert_eq!(next_prime(107), 107);
/// assert_eq!(next_prime(usize::MAX), 130363);
/// ```
pub fn next_prime(value: usize) -> usize {
    let index = PRIMES.partition_point(|&p| p < value);
    PRIMES.get(index).copied().unwrap_or(MAX_PRIME)
}

/// Returns the largest table prime less than or equal to `value`, or
/// [`MIN_PRIME`] when there is none.
///
/// # Examples
///
/// ```rust
/// use prime_chain::primes::previous_prime;
///
/// assert_eq!(previous_prime(0), 3);
/// assert_eq!(previous_prime(100), 89);
/// assert_eq!(previous_prime(107), 107);
/// ```
pub fn previous_prime(value: usize) -> usize {
    let index = PRIMES.partition_point(|&p| p <= value);
    index.checked_sub(1).map_or(MIN_PRIME, |i| PRIMES[i])
}

/// Returns `true` if `value` is one of the table primes.
pub fn is_table_prime(value: usize) -> bool {
    PRIMES.binary_search(&value).is_ok()
}
