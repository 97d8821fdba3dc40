//! Generate binary fixtures of random integers.
//!
//! A fixture is a little-endian `u32` record count `n` followed by `n`
//! little-endian `u32` records, each below `2^30`. The count is roughly
//! `2.5 * 2^N` for a caller-chosen exponent `N`.
pub mod count;
pub mod error;
pub mod writer;

use std::path::Path;

use rand::Rng;

pub use count::{parse_exponent, record_count};
pub use error::FixtureError;
pub use writer::{generate_file, write_fixture};

/// Draw a record count for `exponent` and write a fixture of that size to `path`.
///
/// Returns the record count. Nothing is created when the count does not fit the
/// header.
pub fn generate(path: &Path, exponent: u32, rng: &mut impl Rng) -> Result<u32, FixtureError> {
    let n = record_count(exponent, rng)?;
    generate_file(path, n, rng)?;
    Ok(n)
}
