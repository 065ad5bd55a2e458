//! CLI-specific error types
//!
//! Every CLI error is fatal for the invocation: main prints it to stderr
//! and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use crate::page::NameError;
use crate::store::StoreError;
use crate::wiki::WikiError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Name(#[from] NameError),

    #[error("{0}")]
    Wiki(#[from] WikiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
