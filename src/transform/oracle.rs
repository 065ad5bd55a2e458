//! Existence oracle consumed by the WikiWords transform.

use thiserror::Error;

use crate::page::WikiName;

/// Answers whether a page with the given name currently exists.
///
/// Implementations must be read-only. The WikiWords transform performs one
/// lookup per match, in match order; each lookup may block on a storage
/// round trip.
pub trait LinkExistenceOracle {
    fn exists(&self, name: &WikiName) -> Result<bool, OracleError>;
}

/// Oracle failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The backing store cannot answer right now.
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}
