//! Free-text questions.

use super::gates::{should_ask, ShouldAsk, Validator};
use super::{check_not_asked_reachable, Question};
use crate::error::{InteractionError, InteractionResult};
use crate::io::UserIo;
use crate::types::{Answer, Answers, ValidationResult};
use crate::value::Value;
use tracing::warn;

/// A question with an arbitrary text answer.
#[derive(Debug, Clone)]
pub struct BasicQuestion {
    name: String,
    message: Value<String>,
    default: Value<String>,
    cli_help: Option<String>,
    should_ask: Option<ShouldAsk>,
    validator: Option<Validator>,
    value_if_not_asked: Option<String>,
}

/// Builder for [`BasicQuestion`]
#[derive(Debug, Clone)]
pub struct BasicQuestionBuilder {
    inner: BasicQuestion,
}

/// Fields that can be replaced by [`BasicQuestion::copy_with`].
///
/// `None` leaves a field unchanged; for nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct BasicQuestionOverrides {
    /// Replacement identifier
    pub name: Option<String>,
    /// Replacement message
    pub message: Option<Value<String>>,
    /// Replacement default
    pub default: Option<Value<String>>,
    /// Replacement flag help
    pub cli_help: Option<Option<String>>,
    /// Replacement predicate
    pub should_ask: Option<Option<ShouldAsk>>,
    /// Replacement validator
    pub validator: Option<Option<Validator>>,
    /// Replacement value used when not asked
    pub value_if_not_asked: Option<Option<String>>,
}

impl BasicQuestion {
    /// A free text question seeded with `default`
    pub fn new(
        name: impl Into<String>,
        message: impl Into<Value<String>>,
        default: impl Into<Value<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: default.into(),
            cli_help: None,
            should_ask: None,
            validator: None,
            value_if_not_asked: None,
        }
    }

    /// Start building a question with the same arguments as `new`
    pub fn builder(
        name: impl Into<String>,
        message: impl Into<Value<String>>,
        default: impl Into<Value<String>>,
    ) -> BasicQuestionBuilder {
        BasicQuestionBuilder {
            inner: Self::new(name, message, default),
        }
    }

    /// Prompt text, possibly dynamic
    pub fn message(&self) -> &Value<String> {
        &self.message
    }

    /// Default answer, possibly dynamic
    pub fn default_value(&self) -> &Value<String> {
        &self.default
    }

    /// Run the validator, if any. Without one every value is valid.
    pub fn validate(&self, value: &str, answers: &Answers) -> InteractionResult<ValidationResult> {
        match &self.validator {
            None => Ok(ValidationResult::Success),
            Some(validator) => validator.evaluate(value, answers),
        }
    }

    /// A new question like this one with the given fields replaced
    pub fn copy_with(&self, overrides: BasicQuestionOverrides) -> InteractionResult<Self> {
        BasicQuestionBuilder {
            inner: Self {
                name: overrides.name.unwrap_or_else(|| self.name.clone()),
                message: overrides.message.unwrap_or_else(|| self.message.clone()),
                default: overrides.default.unwrap_or_else(|| self.default.clone()),
                cli_help: overrides.cli_help.unwrap_or_else(|| self.cli_help.clone()),
                should_ask: overrides.should_ask.unwrap_or_else(|| self.should_ask.clone()),
                validator: overrides.validator.unwrap_or_else(|| self.validator.clone()),
                value_if_not_asked: overrides
                    .value_if_not_asked
                    .unwrap_or_else(|| self.value_if_not_asked.clone()),
            },
        }
        .build()
    }

    fn invalid_default(&self, default: String, result: &ValidationResult) -> InteractionError {
        InteractionError::InvalidDefault {
            name: self.name.clone(),
            default,
            message: result.error().unwrap_or_default().to_string(),
        }
    }
}

impl BasicQuestionBuilder {
    /// Help text of the flag
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

    /// Check answers with `validator`
    pub fn validator<F>(self, validator: F) -> Self
    where
        F: Fn(&str, &Answers) -> ValidationResult + Send + Sync + 'static,
    {
        self.with_validator(Validator::new(validator))
    }

    /// Check answers with a declared or closure validator
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.inner.validator = Some(validator);
        self
    }

    /// Answer recorded when the question is skipped
    pub fn value_if_not_asked(mut self, value: impl Into<String>) -> Self {
        self.inner.value_if_not_asked = Some(value.into());
        self
    }

    /// Finish the question. Fails if a value-if-not-asked was given without should-ask.
    pub fn build(self) -> InteractionResult<BasicQuestion> {
        check_not_asked_reachable(
            &self.inner.name,
            self.inner.value_if_not_asked.is_some(),
            self.inner.should_ask.as_ref(),
        )?;
        Ok(self.inner)
    }
}

impl Question for BasicQuestion {
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
        self.value_if_not_asked.clone().map(Answer::Text)
    }

    /// Ask until the answer is valid.
    ///
    /// An invalid answer equal to the default is fatal, the default must
    /// always satisfy the validator. Unattended, the default is validated and
    /// returned without prompting.
    fn ask(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<Answer> {
        let message = self.message.resolve(answers)?;
        let default = self.default.resolve(answers)?;

        if no_user_input {
            let result = self.validate(&default, answers)?;
            if !result.is_valid() {
                return Err(self.invalid_default(default, &result));
            }
            return Ok(Answer::Text(default));
        }

        loop {
            let answer = io.read_line_with_default(&message, &default)?;
            let result = self.validate(&answer, answers)?;
            let error = match result.error() {
                None => return Ok(Answer::Text(answer)),
                Some(error) => error.to_string(),
            };
            if answer == default {
                return Err(self.invalid_default(default, &result));
            }
            warn!(question = %self.name, "rejected answer: {}", error);
            io.write_line(&format!(
                "The answer you have provided is not valid:\n{}\n\n\
                 We will continue asking questions until you provide a valid answer",
                error
            ))?;
        }
    }

    fn validate_answer(&self, value: &Answer, answers: &Answers) -> InteractionResult<ValidationResult> {
        match value {
            Answer::Text(text) => self.validate(text, answers),
            Answer::Bool(flag) => Ok(ValidationResult::failure(format!("{} is not text", flag))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{IoCall, ScriptedIo};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn digits_only() -> BasicQuestion {
        BasicQuestion::builder("age", "How old are you?", "42")
            .validator(|value, _| {
                if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
                    ValidationResult::Success
                } else {
                    ValidationResult::failure(format!("'{}' is not a number", value))
                }
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_unattended_returns_default() {
        let mut io = ScriptedIo::new();
        let answer = digits_only().ask(&Answers::new(), &mut io, true).unwrap();
        assert_eq!(answer, Answer::from("42"));
        assert_eq!(io.prompt_count(), 0);
    }

    #[test]
    fn test_unattended_invalid_default_is_fatal() {
        let question = digits_only()
            .copy_with(BasicQuestionOverrides {
                default: Some("forty".into()),
                ..Default::default()
            })
            .unwrap();
        let err = question.ask(&Answers::new(), &mut ScriptedIo::new(), true).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidDefault { ref default, .. } if default == "forty"));
    }

    #[test]
    fn test_retries_until_valid_exactly_n_plus_one_prompts() {
        let failures = 3;
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let question = BasicQuestion::builder("word", "Say something", "default")
            .validator(move |_, _| {
                if counter.fetch_add(1, Ordering::SeqCst) < failures {
                    ValidationResult::failure("not yet")
                } else {
                    ValidationResult::Success
                }
            })
            .build()
            .unwrap();

        let mut io = ScriptedIo::new().with_lines(["a", "b", "c", "d", "e"]);
        let answer = question.ask(&Answers::new(), &mut io, false).unwrap();

        assert_eq!(answer, Answer::from("d"));
        assert_eq!(io.prompt_count(), failures + 1);
        assert_eq!(io.written().len(), failures);
        assert!(io.written()[0].contains("not yet"));
    }

    #[test]
    fn test_invalid_default_entered_interactively_is_fatal() {
        let question = digits_only()
            .copy_with(BasicQuestionOverrides {
                default: Some("n/a".into()),
                ..Default::default()
            })
            .unwrap();
        // empty line takes the default
        let mut io = ScriptedIo::new().with_lines(["x", ""]);
        let err = question.ask(&Answers::new(), &mut io, false).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidDefault { .. }));
        assert_eq!(io.prompt_count(), 2);
    }

    #[test]
    fn test_prompt_is_seeded_with_resolved_default() {
        let question = BasicQuestion::new(
            "dog_name",
            "Dog's name?",
            Value::dynamic(|answers: &Answers| format!("{}'s dog", answers["user"])),
        );
        let mut answers = Answers::new();
        answers.insert("user".to_string(), Answer::from("Patrick"));

        let mut io = ScriptedIo::new();
        assert_eq!(
            question.ask(&answers, &mut io, false).unwrap(),
            Answer::from("Patrick's dog")
        );
        assert_eq!(
            io.calls(),
            vec![IoCall::ReadLine {
                prompt: "Dog's name?".to_string(),
                default: "Patrick's dog".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_without_validator_succeeds() {
        let question = BasicQuestion::new("q", "Q?", "");
        assert!(question.validate("anything", &Answers::new()).unwrap().is_valid());
    }

    #[test]
    fn test_copy_with_clears_validator() {
        let copy = digits_only()
            .copy_with(BasicQuestionOverrides {
                validator: Some(None),
                ..Default::default()
            })
            .unwrap();
        assert!(copy.validate("abc", &Answers::new()).unwrap().is_valid());
        assert!(!digits_only().validate("abc", &Answers::new()).unwrap().is_valid());
    }
}
