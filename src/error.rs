//! Error types for interaction resolution

use thiserror::Error;

/// Result type for interaction operations
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Errors raised while declaring or resolving interactions.
///
/// Every variant except [`InteractionError::Io`] describes a mistake in the
/// declaration itself. None of them are retried.
#[derive(Error, Debug)]
pub enum InteractionError {
    /// A declared value is neither a literal of the expected kind nor dynamic
    #[error("Invalid value: {value} (expected {expected})")]
    InvalidValue {
        /// Rendering of the offending value
        value: String,
        /// Kind of value that was expected
        expected: &'static str,
    },

    /// A dynamic value produced something of the wrong kind
    #[error("Invalid dynamic value: {value} (expected {expected})")]
    InvalidDynamicValue {
        /// Rendering of the value the function produced
        value: String,
        /// Kind of value that was expected
        expected: &'static str,
    },

    /// A should-ask predicate is present but cannot be evaluated
    #[error("Invalid value for should_ask: {0}")]
    InvalidPredicate(String),

    /// A validator is present but cannot be evaluated
    #[error("Invalid value for validator: {0}")]
    InvalidValidator(String),

    /// `value_if_not_asked` was given without a should-ask predicate
    #[error(
        "Question '{0}' has a value_if_not_asked but no should_ask. \
         Either remove value_if_not_asked or add should_ask."
    )]
    NotAskedWithoutShouldAsk(String),

    /// `value_if_not_asked` has the wrong kind or fails the question's own validation
    #[error("NotAsked value for '{name}' is not valid: {message}")]
    InvalidNotAskedValue {
        /// Question identifier
        name: String,
        /// Why the value was rejected
        message: String,
    },

    /// A default failed the question's own validator
    #[error("Default value '{default}' of '{name}' must satisfy the validator: {message}")]
    InvalidDefault {
        /// Question identifier
        name: String,
        /// The resolved default
        default: String,
        /// Validator message
        message: String,
    },

    /// A choice default is not one of the resolved option keys
    #[error("Default \"{default}\" of '{name}' was not an option: [{options}]")]
    DefaultNotAnOption {
        /// Question identifier
        name: String,
        /// The resolved default
        default: String,
        /// Comma separated option keys
        options: String,
    },

    /// A choice resolved to an empty option set
    #[error("Options of '{0}' must contain at least one value")]
    EmptyOptions(String),

    /// An interaction kind the engine does not know how to evaluate
    #[error("Unsupported interaction type: {0}")]
    UnsupportedInteractionType(String),

    /// Two questions (or a question and a pre-seeded answer) bind the same key
    #[error("{0} has already been used")]
    DuplicateQuestionName(String),

    /// The input/output backend failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InteractionError {
    /// Create an invalid-not-asked-value error
    pub fn not_asked<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::InvalidNotAskedValue {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a duplicate-name declaration error
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::DuplicateQuestionName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_message_names_identifier() {
        let err = InteractionError::DuplicateQuestionName("likes_dogs".to_string());
        assert_eq!(err.to_string(), "likes_dogs has already been used");
        assert!(err.is_duplicate_name());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: InteractionError = io.into();
        assert!(matches!(err, InteractionError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn test_not_asked_helper() {
        let err = InteractionError::not_asked("mood", "Chosen value: angry not in options");
        assert!(err.to_string().contains("mood"));
        assert!(err.to_string().contains("angry"));
    }
}
