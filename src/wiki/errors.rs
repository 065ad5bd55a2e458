//! Service-level errors.

use thiserror::Error;

use crate::diff::DiffError;
use crate::page::NameError;
use crate::store::StoreError;
use crate::transform::TransformError;

/// Result type for wiki operations
pub type WikiResult<T> = Result<T, WikiError>;

/// Anything a wiki operation can fail with.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Diff(#[from] DiffError),
}
