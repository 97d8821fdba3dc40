//! Compute how many records a fixture holds.
//!
//! For an exponent `N` the count is `2 * 2^N` plus a random jitter in
//! `[0, 2^N / 2]`, rounded down to a multiple of [`PARTITION`].
use rand::Rng;
use tracing::debug;

use crate::error::FixtureError;

/// Granularity the record count is rounded down to.
pub const PARTITION: u64 = 1;

/// Draw a record count for exponent `exponent`.
///
/// The count has to fit in the 32-bit header, which rules out any exponent
/// above 30.
pub fn record_count(exponent: u32, rng: &mut impl Rng) -> Result<u32, FixtureError> {
    let base = 1u64
        .checked_shl(exponent)
        .filter(|base| *base <= u64::from(u32::MAX))
        .ok_or(FixtureError::ExponentTooLarge { exponent })?;

    let jitter = rng.gen_range(0..=base / 2);
    let n = base + base + jitter;
    let n = (n / PARTITION) * PARTITION;
    debug!(exponent, base, jitter, n, "computed record count");

    u32::try_from(n).map_err(|_| FixtureError::ExponentTooLarge { exponent })
}

/// Parse `N` as given on the command line, ignoring surrounding whitespace.
pub fn parse_exponent(s: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|e| format!("`{}` is not a non-negative integer: {}", s, e))
}
