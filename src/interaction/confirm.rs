//! Yes/no questions.

use super::gates::{should_ask, ShouldAsk};
use super::{check_not_asked_reachable, Question};
use crate::error::InteractionResult;
use crate::io::UserIo;
use crate::types::{Answer, Answers, ValidationResult};
use crate::value::Value;

/// A question with a yes or no answer.
#[derive(Debug, Clone)]
pub struct Confirm {
    name: String,
    message: Value<String>,
    default: Value<bool>,
    cli_help: Option<String>,
    should_ask: Option<ShouldAsk>,
    value_if_not_asked: Option<bool>,
}

/// Builder for [`Confirm`]
#[derive(Debug, Clone)]
pub struct ConfirmBuilder {
    inner: Confirm,
}

/// Fields that can be replaced by [`Confirm::copy_with`].
///
/// `None` leaves a field unchanged; for nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct ConfirmOverrides {
    /// Replacement identifier
    pub name: Option<String>,
    /// Replacement message
    pub message: Option<Value<String>>,
    /// Replacement default
    pub default: Option<Value<bool>>,
    /// Replacement flag help
    pub cli_help: Option<Option<String>>,
    /// Replacement predicate
    pub should_ask: Option<Option<ShouldAsk>>,
    /// Replacement value used when not asked
    pub value_if_not_asked: Option<Option<bool>>,
}

impl Confirm {
    /// A confirm defaulting to `false`
    pub fn new(name: impl Into<String>, message: impl Into<Value<String>>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: Value::Static(false),
            cli_help: None,
            should_ask: None,
            value_if_not_asked: None,
        }
    }

    /// Start building a confirm defaulting to `false`
    pub fn builder(name: impl Into<String>, message: impl Into<Value<String>>) -> ConfirmBuilder {
        ConfirmBuilder {
            inner: Self::new(name, message),
        }
    }

    /// Prompt text, possibly dynamic
    pub fn message(&self) -> &Value<String> {
        &self.message
    }

    /// Default answer, possibly dynamic
    pub fn default_value(&self) -> &Value<bool> {
        &self.default
    }

    /// A new confirm like this one with the given fields replaced
    pub fn copy_with(&self, overrides: ConfirmOverrides) -> InteractionResult<Self> {
        ConfirmBuilder {
            inner: Self {
                name: overrides.name.unwrap_or_else(|| self.name.clone()),
                message: overrides.message.unwrap_or_else(|| self.message.clone()),
                default: overrides.default.unwrap_or_else(|| self.default.clone()),
                cli_help: overrides.cli_help.unwrap_or_else(|| self.cli_help.clone()),
                should_ask: overrides.should_ask.unwrap_or_else(|| self.should_ask.clone()),
                value_if_not_asked: overrides.value_if_not_asked.unwrap_or(self.value_if_not_asked),
            },
        }
        .build()
    }
}

impl ConfirmBuilder {
    /// Set the default answer
    pub fn default(mut self, default: impl Into<Value<bool>>) -> Self {
        self.inner.default = default.into();
        self
    }

    /// Help text of the `--name` flag
    pub fn cli_help(mut self, help: impl Into<String>) -> Self {
        self.inner.cli_help = Some(help.into());
        self
    }

    /// Only ask when `predicate` holds
    pub fn should_ask<F>(self, predicate: F) -> Self
    where
        F: Fn(&Answers) -> bool + Send + Sync + 'static,
    {
        self.with_should_ask(ShouldAsk::new(predicate))
    }

    /// Only ask when `gate` holds
    pub fn with_should_ask(mut self, gate: ShouldAsk) -> Self {
        self.inner.should_ask = Some(gate);
        self
    }

    /// Answer recorded when the question is skipped
    pub fn value_if_not_asked(mut self, value: bool) -> Self {
        self.inner.value_if_not_asked = Some(value);
        self
    }

    /// Finish the question. Fails if a value-if-not-asked was given without should-ask.
    pub fn build(self) -> InteractionResult<Confirm> {
        check_not_asked_reachable(
            &self.inner.name,
            self.inner.value_if_not_asked.is_some(),
            self.inner.should_ask.as_ref(),
        )?;
        Ok(self.inner)
    }
}

impl Question for Confirm {
    fn name(&self) -> &str {
        &self.name
    }

    fn cli_help(&self) -> Option<&str> {
        self.cli_help.as_deref()
    }

    fn should_ask(&self, answers: &Answers) -> InteractionResult<bool> {
        should_ask(self.should_ask.as_ref(), answers)
    }

    fn value_if_not_asked(&self) -> Option<Answer> {
        self.value_if_not_asked.map(Answer::Bool)
    }

    fn ask(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<Answer> {
        let message = self.message.resolve(answers)?;
        let default = self.default.resolve(answers)?;
        if no_user_input {
            return Ok(Answer::Bool(default));
        }
        Ok(Answer::Bool(io.read_yes_no(&message, default)?))
    }

    fn validate_answer(&self, value: &Answer, _answers: &Answers) -> InteractionResult<ValidationResult> {
        Ok(match value {
            Answer::Bool(_) => ValidationResult::Success,
            Answer::Text(text) => ValidationResult::failure(format!("'{}' is not a boolean", text)),
        })
    }
}
