//! Version diff errors.

use thiserror::Error;

use crate::history::InvalidEntryId;

/// Errors from the version diff path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The id is well formed but no such entry exists for the page. A
    /// normal outcome, not an internal failure.
    #[error("no history entry {id} for page {name}")]
    EntryNotFound { name: String, id: String },

    /// The id is not even well formed.
    #[error(transparent)]
    InvalidEntryId(#[from] InvalidEntryId),
}
