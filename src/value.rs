//! Static-or-dynamic values and their resolution against answers collected so far.
//!
//! A [`Value`] is either a literal or a function of the answers so far. Values
//! declared in configuration arrive loosely typed, so resolution checks the
//! kind of what it produced and reports [`InteractionError::InvalidValue`] or
//! [`InteractionError::InvalidDynamicValue`] on a mismatch.

use crate::error::{InteractionError, InteractionResult};
use crate::types::{Answers, LabeledOptions};
use std::fmt;
use std::sync::Arc;

/// Typed function of the answers collected so far
pub type DynamicFn<T> = Arc<dyn Fn(&Answers) -> T + Send + Sync>;

/// Loosely typed function of the answers collected so far
pub type DeclaredFn = Arc<dyn Fn(&Answers) -> serde_json::Value + Send + Sync>;

/// Kinds of value the interaction model resolves: text, booleans and option sets.
pub trait ValueKind: Clone + Sized {
    /// Name of the kind, used in error messages
    const EXPECTED: &'static str;

    /// Convert a loosely typed value, or `None` if it is of another kind
    fn from_declared(value: &serde_json::Value) -> Option<Self>;
}

impl ValueKind for String {
    const EXPECTED: &'static str = "string";

    fn from_declared(value: &serde_json::Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl ValueKind for bool {
    const EXPECTED: &'static str = "bool";

    fn from_declared(value: &serde_json::Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ValueKind for LabeledOptions {
    const EXPECTED: &'static str = "options";

    /// Accepts a list of labels, a list of `{ value, label }` tables or a
    /// `value -> label` map.
    fn from_declared(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Array(items) => {
                if let Some(labels) = items
                    .iter()
                    .map(|item| item.as_str())
                    .collect::<Option<Vec<_>>>()
                {
                    return Some(LabeledOptions::from_labels(labels));
                }
                items
                    .iter()
                    .map(|item| {
                        let key = item.get("value")?.as_str()?;
                        let label = match item.get("label") {
                            Some(label) => label.as_str()?,
                            None => key,
                        };
                        Some((key, label))
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(LabeledOptions::from_pairs)
            }
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(key, label)| label.as_str().map(|label| (key.as_str(), label)))
                .collect::<Option<Vec<_>>>()
                .map(LabeledOptions::from_pairs),
            _ => None,
        }
    }
}

/// A value that is either given literally or computed from the answers so far.
#[derive(Clone)]
pub enum Value<T> {
    /// Literal value
    Static(T),
    /// Function of the answers so far
    Dynamic(DynamicFn<T>),
    /// Loosely typed literal, checked when resolved
    Declared(serde_json::Value),
    /// Loosely typed function, its result checked when resolved
    DeclaredDynamic(DeclaredFn),
}

/// Static-or-dynamic option set
pub type OptionsValue = Value<LabeledOptions>;

impl<T: ValueKind> Value<T> {
    /// Wrap a function of the answers so far
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Answers) -> T + Send + Sync + 'static,
    {
        Value::Dynamic(Arc::new(f))
    }

    /// Wrap a loosely typed function of the answers so far
    pub fn declared_dynamic<F>(f: F) -> Self
    where
        F: Fn(&Answers) -> serde_json::Value + Send + Sync + 'static,
    {
        Value::DeclaredDynamic(Arc::new(f))
    }

    /// Whether resolution depends on the answers
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Value::Dynamic(_) | Value::DeclaredDynamic(_))
    }

    /// Resolve to a concrete value of kind `T`.
    pub fn resolve(&self, answers: &Answers) -> InteractionResult<T> {
        match self {
            Value::Static(value) => Ok(value.clone()),
            Value::Dynamic(f) => Ok(f(answers)),
            Value::Declared(raw) => {
                T::from_declared(raw).ok_or_else(|| InteractionError::InvalidValue {
                    value: raw.to_string(),
                    expected: T::EXPECTED,
                })
            }
            Value::DeclaredDynamic(f) => {
                let produced = f(answers);
                T::from_declared(&produced).ok_or_else(|| InteractionError::InvalidDynamicValue {
                    value: produced.to_string(),
                    expected: T::EXPECTED,
                })
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Value::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
            Value::Declared(raw) => f.debug_tuple("Declared").field(raw).finish(),
            Value::DeclaredDynamic(_) => f.write_str("DeclaredDynamic(<fn>)"),
        }
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Static(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Static(value.to_string())
    }
}

impl From<Vec<String>> for OptionsValue {
    fn from(labels: Vec<String>) -> Self {
        Value::Static(LabeledOptions::from_labels(labels))
    }
}

impl From<Vec<&str>> for OptionsValue {
    fn from(labels: Vec<&str>) -> Self {
        Value::Static(LabeledOptions::from_labels(labels))
    }
}

impl<const N: usize> From<[&str; N]> for OptionsValue {
    fn from(labels: [&str; N]) -> Self {
        Value::Static(LabeledOptions::from_labels(labels))
    }
}
