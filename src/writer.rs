//! Encode fixtures: a little-endian `u32` header holding the record count,
//! followed by that many little-endian `u32` records.
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use rand::Rng;
use tracing::info;

use crate::error::FixtureError;

/// Records are drawn from `[0, 2^VALUE_BITS)`.
pub const VALUE_BITS: u32 = 30;

/// Exclusive upper bound of a record.
pub const VALUE_LIMIT: u32 = 1 << VALUE_BITS;

/// Encode `value` least-significant byte first, whatever the host order is.
pub fn encode(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Write the header `n` then `n` random records to `writer`.
pub fn write_fixture<W: Write>(writer: &mut W, n: u32, rng: &mut impl Rng) -> io::Result<()> {
    writer.write_all(&encode(n))?;
    for _i in 0..n {
        let record = rng.gen_range(0..VALUE_LIMIT);
        writer.write_all(&encode(record))?;
    }
    Ok(())
}

/// Create (or truncate) `path` and fill it with a fixture of `n` records.
pub fn generate_file(path: &Path, n: u32, rng: &mut impl Rng) -> Result<(), FixtureError> {
    let file = File::create(path).map_err(|source| FixtureError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    info!("writing {} records to `{}`", n, path.display());

    let mut writer = BufWriter::new(file);
    write_fixture(&mut writer, n, rng)
        .and_then(|()| writer.flush())
        .map_err(|source| FixtureError::Write {
            path: path.to_path_buf(),
            source,
        })
}
