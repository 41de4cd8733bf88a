//! Record store error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while populating the record store.
///
/// All of these are fatal at startup; no operation on a populated store
/// can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of customer records
    #[error("Invalid data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
