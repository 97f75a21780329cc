//! Shared value types: answers, validation outcomes and option sets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single collected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Answer of a confirm question
    Bool(bool),
    /// Answer of a choice or free-text question
    Text(String),
}

impl Answer {
    /// The text of the answer, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::Bool(_) => None,
        }
    }

    /// The boolean value of the answer, if it is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Bool(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }

    /// `true` for `Bool(true)` and non-empty text
    pub fn is_truthy(&self) -> bool {
        match self {
            Answer::Bool(value) => *value,
            Answer::Text(text) => !text.is_empty(),
        }
    }

    /// Loosely typed rendering used by declared (configuration) values
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Answer::Bool(value) => serde_json::Value::Bool(*value),
            Answer::Text(text) => serde_json::Value::String(text.clone()),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Bool(value) => write!(f, "{}", value),
            Answer::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Answers collected so far, keyed by question identifier
pub type Answers = HashMap<String, Answer>;

/// Outcome of validating an option or free-text answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value is acceptable
    Success,
    /// The value was rejected, with a human readable reason
    Failure(String),
}

impl ValidationResult {
    /// Create a failure with the given message
    pub fn failure<S: Into<String>>(message: S) -> Self {
        ValidationResult::Failure(message.into())
    }

    /// Whether validation succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(message) => Some(message),
        }
    }
}

/// Canonical option set: an ordered mapping from returned value to displayed label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabeledOptions(Vec<(String, String)>);

impl LabeledOptions {
    /// Options where each label is also the returned value
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            labels
                .into_iter()
                .map(|label| {
                    let label = label.into();
                    (label.clone(), label)
                })
                .collect(),
        )
    }

    /// Options from `(value, label)` pairs. A repeated value keeps its first position
    /// and takes the last label.
    pub fn from_pairs<I, K, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, label) in pairs {
            let key = key.into();
            let label = label.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = label,
                None => entries.push((key, label)),
            }
        }
        Self(entries)
    }

    /// Returned values, in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// `(value, label)` pairs, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, label)| (key.as_str(), label.as_str()))
    }

    /// Whether `key` is one of the returned values
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|existing| existing == key)
    }

    /// Label displayed for `key`
    pub fn label(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, label)| label)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no options
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn joined_keys(&self) -> String {
        self.keys().collect::<Vec<_>>().join(", ")
    }
}
