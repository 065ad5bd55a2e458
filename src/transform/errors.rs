//! Transform pipeline errors.

use thiserror::Error;

use super::oracle::OracleError;

/// Result type for content transforms
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors surfaced while rewriting content for display
#[derive(Debug, Error)]
pub enum TransformError {
    /// The existence oracle could not answer. The render must fail rather
    /// than classify every page as missing.
    #[error("existence lookup unavailable: {0}")]
    LookupUnavailable(#[from] OracleError),
}
