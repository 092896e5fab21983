//! Root error types for the sync application.
//!
//! Per-page and per-record failures never surface here: the fetcher absorbs
//! them into partial results and the normalizer substitutes defaults. Only
//! the two run-level failure conditions (missing credentials, nothing to
//! export) plus I/O problems around the output file reach the binary.

use thiserror::Error;

use crate::export::ExportError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the sync run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing credential: {0}")]
    MissingCredentials(String),

    #[error("Secret store error: {0}")]
    Secret(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),
}

impl From<keyring::Error> for Error {
    fn from(err: keyring::Error) -> Self {
        Error::Secret(err.to_string())
    }
}
