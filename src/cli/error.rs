//! Error types for the flag projection

use crate::error::InteractionError;
use thiserror::Error;

/// Result type for flag parsing operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while parsing answers from command-line flags
#[derive(Error, Debug)]
pub enum CliError {
    /// The argument list does not match the flag grammar
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// A flag value, or the default standing in for it, failed validation
    #[error("argument {flag}: invalid value '{value}': {message}")]
    InvalidValue {
        /// The rejected value
        value: String,
        /// Canonical flag, e.g. `--mood`
        flag: String,
        /// Validator message
        message: String,
    },

    /// Declaration or configuration error, passed through unchanged
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

impl CliError {
    /// Create an invalid flag value error
    pub fn invalid_value<V, F, M>(value: V, flag: F, message: M) -> Self
    where
        V: Into<String>,
        F: Into<String>,
        M: Into<String>,
    {
        Self::InvalidValue {
            value: value.into(),
            flag: flag.into(),
            message: message.into(),
        }
    }

    /// Whether the user supplied bad input, as opposed to a broken declaration
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidValue { .. })
    }
}
