//! Engine configuration.
//!
//! A small JSON config file with serde defaults and a validation pass,
//! loaded by the CLI before opening the store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::HISTORY_FETCH_LIMIT;
use crate::wiki::DEFAULT_GOTO_PATH;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Path of the JSON store file (required).
    pub data_path: String,

    /// Redirect indirection endpoint for external links.
    #[serde(default = "default_goto_path")]
    pub goto_path: String,

    /// How many history entries a listing shows.
    #[serde(default = "default_history_display")]
    pub history_display: usize,
}

fn default_goto_path() -> String {
    DEFAULT_GOTO_PATH.to_string()
}

fn default_history_display() -> usize {
    HISTORY_FETCH_LIMIT
}

impl WikiConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: WikiConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// A default configuration pointing at the given store file.
    pub fn with_data_path(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            goto_path: default_goto_path(),
            history_display: default_history_display(),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.data_path.is_empty() {
            return Err(ConfigError::Invalid("data_path must not be empty".to_string()));
        }
        if !self.goto_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "goto_path must be absolute, got {:?}",
                self.goto_path
            )));
        }
        if self.history_display == 0 || self.history_display > HISTORY_FETCH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "history_display must be between 1 and {}",
                HISTORY_FETCH_LIMIT
            )));
        }
        Ok(())
    }
}
