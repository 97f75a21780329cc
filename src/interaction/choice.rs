//! Multiple-choice questions.

use super::gates::{should_ask, ShouldAsk};
use super::{check_not_asked_reachable, Question};
use crate::error::{InteractionError, InteractionResult};
use crate::io::UserIo;
use crate::types::{Answer, Answers, LabeledOptions, ValidationResult};
use crate::value::{OptionsValue, Value};

/// A question with a set of possible answers.
///
/// Options are either a list of labels or `(value, label)` pairs, in which
/// case the label is displayed and the value returned.
#[derive(Debug, Clone)]
pub struct Choice {
    name: String,
    message: Value<String>,
    options: OptionsValue,
    default: Value<String>,
    cli_help: Option<String>,
    should_ask: Option<ShouldAsk>,
    value_if_not_asked: Option<String>,
}

/// Builder for [`Choice`]
#[derive(Debug, Clone)]
pub struct ChoiceBuilder {
    inner: Choice,
}

/// Fields that can be replaced by [`Choice::copy_with`].
///
/// `None` leaves a field unchanged; for nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct ChoiceOverrides {
    /// Replacement identifier
    pub name: Option<String>,
    /// Replacement message
    pub message: Option<Value<String>>,
    /// Replacement options
    pub options: Option<OptionsValue>,
    /// Replacement default
    pub default: Option<Value<String>>,
    /// Replacement flag help
    pub cli_help: Option<Option<String>>,
    /// Replacement predicate
    pub should_ask: Option<Option<ShouldAsk>>,
    /// Replacement value used when not asked
    pub value_if_not_asked: Option<Option<String>>,
}

impl Choice {
    /// A choice between `options`, preselecting `default`
    pub fn new(
        name: impl Into<String>,
        message: impl Into<Value<String>>,
        options: impl Into<OptionsValue>,
        default: impl Into<Value<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            options: options.into(),
            default: default.into(),
            cli_help: None,
            should_ask: None,
            value_if_not_asked: None,
        }
    }

    /// Start building a question with the same arguments as `new`
    pub fn builder(
        name: impl Into<String>,
        message: impl Into<Value<String>>,
        options: impl Into<OptionsValue>,
        default: impl Into<Value<String>>,
    ) -> ChoiceBuilder {
        ChoiceBuilder {
            inner: Self::new(name, message, options, default),
        }
    }

    /// Prompt text, possibly dynamic
    pub fn message(&self) -> &Value<String> {
        &self.message
    }

    /// Options as declared, before resolution
    pub fn options(&self) -> &OptionsValue {
        &self.options
    }

    /// Preselected option value, possibly dynamic
    pub fn default_value(&self) -> &Value<String> {
        &self.default
    }

    /// Options resolved against the answers so far, in canonical form
    pub fn labeled_options(&self, answers: &Answers) -> InteractionResult<LabeledOptions> {
        self.options.resolve(answers)
    }

    /// Check that `value` is one of the resolved option values
    pub fn validate(&self, value: &str, answers: &Answers) -> InteractionResult<ValidationResult> {
        let options = self.labeled_options(answers)?;
        if options.contains_key(value) {
            Ok(ValidationResult::Success)
        } else {
            Ok(ValidationResult::failure(format!(
                "Chosen value: {} not in options [{}]",
                value,
                options.joined_keys()
            )))
        }
    }

    /// A new choice like this one with the given fields replaced
    pub fn copy_with(&self, overrides: ChoiceOverrides) -> InteractionResult<Self> {
        ChoiceBuilder {
            inner: Self {
                name: overrides.name.unwrap_or_else(|| self.name.clone()),
                message: overrides.message.unwrap_or_else(|| self.message.clone()),
                options: overrides.options.unwrap_or_else(|| self.options.clone()),
                default: overrides.default.unwrap_or_else(|| self.default.clone()),
                cli_help: overrides.cli_help.unwrap_or_else(|| self.cli_help.clone()),
                should_ask: overrides.should_ask.unwrap_or_else(|| self.should_ask.clone()),
                value_if_not_asked: overrides
                    .value_if_not_asked
                    .unwrap_or_else(|| self.value_if_not_asked.clone()),
            },
        }
        .build()
    }
}

impl ChoiceBuilder {
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

    /// Option value recorded when the question is skipped
    pub fn value_if_not_asked(mut self, value: impl Into<String>) -> Self {
        self.inner.value_if_not_asked = Some(value.into());
        self
    }

    /// Finish the question. Fails if a value-if-not-asked was given without should-ask.
    ///
    /// The default is not checked against the options here, options may depend
    /// on answers that do not exist yet.
    pub fn build(self) -> InteractionResult<Choice> {
        check_not_asked_reachable(
            &self.inner.name,
            self.inner.value_if_not_asked.is_some(),
            self.inner.should_ask.as_ref(),
        )?;
        Ok(self.inner)
    }
}

impl Question for Choice {
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

    fn ask(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<Answer> {
        let message = self.message.resolve(answers)?;
        let options = self.labeled_options(answers)?;
        if options.is_empty() {
            return Err(InteractionError::EmptyOptions(self.name.clone()));
        }
        let default = self.default.resolve(answers)?;
        if !options.contains_key(&default) {
            return Err(InteractionError::DefaultNotAnOption {
                name: self.name.clone(),
                default,
                options: options.joined_keys(),
            });
        }
        if no_user_input {
            return Ok(Answer::Text(default));
        }
        Ok(Answer::Text(io.read_menu_choice(&message, &options, &default)?))
    }

    fn validate_answer(&self, value: &Answer, answers: &Answers) -> InteractionResult<ValidationResult> {
        match value {
            Answer::Text(text) => self.validate(text, answers),
            Answer::Bool(flag) => Ok(ValidationResult::failure(format!(
                "Chosen value: {} is not text",
                flag
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{IoCall, ScriptedIo};

    fn mood() -> Choice {
        Choice::new("mood", "How are you?", ["happy", "sad"], "happy")
    }

    #[test]
    fn test_unattended_returns_default() {
        let mut io = ScriptedIo::new();
        let answer = mood().ask(&Answers::new(), &mut io, true).unwrap();
        assert_eq!(answer, Answer::from("happy"));
        assert_eq!(io.prompt_count(), 0);
    }

    #[test]
    fn test_interactive_returns_chosen_key() {
        let choice = Choice::new(
            "pet",
            "Pick a pet",
            LabeledOptions::from_pairs([("dog", "A loyal dog"), ("cat", "An aloof cat")]),
            "dog",
        );
        let mut io = ScriptedIo::new().with_menu_choices(["cat"]);
        assert_eq!(choice.ask(&Answers::new(), &mut io, false).unwrap(), Answer::from("cat"));
        assert_eq!(
            io.calls(),
            vec![IoCall::Menu {
                prompt: "Pick a pet".to_string(),
                default: "dog".to_string()
            }]
        );
    }

    #[test]
    fn test_default_not_an_option_fails_even_unattended() {
        let choice = Choice::new("mood", "How are you?", ["happy", "sad"], "angry");
        let err = choice.ask(&Answers::new(), &mut ScriptedIo::new(), true).unwrap_err();
        assert!(matches!(err, InteractionError::DefaultNotAnOption { ref default, .. } if default == "angry"));
    }

    #[test]
    fn test_empty_options_rejected() {
        let choice = Choice::new("mood", "How are you?", Vec::<String>::new(), "happy");
        let err = choice.ask(&Answers::new(), &mut ScriptedIo::new(), true).unwrap_err();
        assert!(matches!(err, InteractionError::EmptyOptions(_)));
    }

    #[test]
    fn test_validate_names_rejected_value() {
        let result = mood().validate("angry", &Answers::new()).unwrap();
        assert!(result.error().unwrap().contains("angry"));
        assert!(mood().validate("sad", &Answers::new()).unwrap().is_valid());
    }

    #[test]
    fn test_dynamic_options_follow_answers() {
        let choice = Choice::new(
            "dog_name",
            "Name your dog",
            Value::dynamic(|answers: &Answers| {
                if answers.get("big").and_then(Answer::as_bool) == Some(true) {
                    LabeledOptions::from_labels(["Rex", "Brutus"])
                } else {
                    LabeledOptions::from_labels(["Fifi", "Pip"])
                }
            }),
            Value::dynamic(|answers: &Answers| {
                if answers.get("big").and_then(Answer::as_bool) == Some(true) {
                    "Rex".to_string()
                } else {
                    "Pip".to_string()
                }
            }),
        );
        let mut answers = Answers::new();
        answers.insert("big".to_string(), Answer::Bool(true));
        assert_eq!(
            choice.ask(&answers, &mut ScriptedIo::new(), true).unwrap(),
            Answer::from("Rex")
        );
        assert!(!choice.validate("Pip", &answers).unwrap().is_valid());
    }

    #[test]
    fn test_copy_with_replaces_options_only() {
        let copy = mood()
            .copy_with(ChoiceOverrides {
                options: Some(vec!["happy", "meh"].into()),
                ..Default::default()
            })
            .unwrap();
        assert!(copy.validate("meh", &Answers::new()).unwrap().is_valid());
        assert_eq!(copy.name(), "mood");
        assert_eq!(copy.default_value().resolve(&Answers::new()).unwrap(), "happy");
    }
}
