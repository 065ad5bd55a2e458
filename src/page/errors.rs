//! Page naming errors.

use thiserror::Error;

/// Result type for page name operations
pub type NameResult<T> = Result<T, NameError>;

/// Page name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is not a WikiWord, even after canonicalization.
    #[error("invalid page name {0:?}: not a WikiWord")]
    Invalid(String),
}
