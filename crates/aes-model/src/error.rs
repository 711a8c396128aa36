//! Error type shared by every fallible entry point.

use thiserror::Error;

/// Input validation failures. Both are raised before any transform runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key length (in bytes) is not 16, 24 or 32.
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),
    /// Block length (in bytes) is not 16.
    #[error("invalid block length: {0} bytes (expected 16)")]
    InvalidBlockLength(usize),
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
