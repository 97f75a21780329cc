//! Error types for loading declared interactions

use crate::error::InteractionError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading interactions from TOML
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the schema
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required field is missing or malformed
    #[error("Invalid interaction #{index}: {message}")]
    Invalid {
        /// Position of the interaction in the document, starting at 0
        index: usize,
        /// What is wrong with it
        message: String,
    },

    /// The interaction itself could not be constructed
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

impl ConfigError {
    /// Create an invalid interaction error
    pub fn invalid<S: Into<String>>(index: usize, message: S) -> Self {
        Self::Invalid {
            index,
            message: message.into(),
        }
    }
}
