//! Errors that can happen while generating a fixture.
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// `exponent` is the N that was asked for.
    #[error("record count for N = {exponent} does not fit in a 32-bit header")]
    ExponentTooLarge { exponent: u32 },
    #[error("cannot create `{}`", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
