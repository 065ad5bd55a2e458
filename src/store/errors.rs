//! Storage collaborator errors.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures from the page/history storage collaborator.
///
/// All of these are fatal for the enclosing save or view operation and are
/// not retried internally; retries, if any, belong to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// I/O failure on the backing file.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted state cannot be decoded.
    #[error("store corrupt: {0}")]
    Corrupt(String),
}
