//! Interaction model: messages, confirmations, choices and free-text questions.
//!
//! Interactions are immutable values declared up front. Displayables
//! ([`Echo`], [`Acknowledge`]) show a message and produce no answer. Questions
//! ([`Confirm`], [`Choice`], [`BasicQuestion`]) produce exactly one named answer.
//!
//! ```
//! use askflow::interaction::{Choice, Confirm, Echo, Interaction};
//!
//! let interactions: Vec<Interaction> = vec![
//!     Echo::new("Welcome").into(),
//!     Confirm::builder("likes_dogs", "Do you like dogs?").default(true).build().unwrap().into(),
//!     Choice::new("mood", "How are you?", ["happy", "sad"], "happy").into(),
//! ];
//! assert_eq!(interactions.len(), 3);
//! ```

pub mod basic;
pub mod choice;
pub mod confirm;
pub mod display;
pub mod gates;

pub use basic::{BasicQuestion, BasicQuestionBuilder, BasicQuestionOverrides};
pub use choice::{Choice, ChoiceBuilder, ChoiceOverrides};
pub use confirm::{Confirm, ConfirmBuilder, ConfirmOverrides};
pub use display::{Acknowledge, DisplayOverrides, Echo};
pub use gates::{should_ask, PredicateFn, ShouldAsk, Validator, ValidatorFn};

use crate::error::{InteractionError, InteractionResult};
use crate::io::UserIo;
use crate::types::{Answer, Answers, ValidationResult};

/// A message shown to the user that produces no answer.
pub trait Displayable {
    /// Whether the message should be shown given the answers so far
    fn should_display(&self, answers: &Answers) -> InteractionResult<bool>;

    /// Show the message. `no_user_input` suppresses any blocking.
    fn display(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<()>;
}

/// A prompt that produces one named answer.
pub trait Question {
    /// Identifier the answer is stored under
    fn name(&self) -> &str;

    /// Help text for the command-line flag
    fn cli_help(&self) -> Option<&str>;

    /// Whether the question should be asked given the answers so far
    fn should_ask(&self, answers: &Answers) -> InteractionResult<bool>;

    /// Answer recorded when the question is not asked
    fn value_if_not_asked(&self) -> Option<Answer>;

    /// Prompt for an answer. With `no_user_input` the default is returned without blocking.
    fn ask(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<Answer>;

    /// Validate an answer against this question's own options or validator
    fn validate_answer(&self, value: &Answer, answers: &Answers) -> InteractionResult<ValidationResult>;
}

/// Any declared interaction.
#[derive(Debug, Clone)]
pub enum Interaction {
    /// Print a message
    Echo(Echo),
    /// Print a message and wait for ENTER
    Acknowledge(Acknowledge),
    /// Yes/no question
    Confirm(Confirm),
    /// Pick one of several options
    Choice(Choice),
    /// Free-text question
    BasicQuestion(BasicQuestion),
}

impl Interaction {
    /// The interaction as a question, if it is one
    pub fn as_question(&self) -> Option<&dyn Question> {
        match self {
            Interaction::Confirm(q) => Some(q),
            Interaction::Choice(q) => Some(q),
            Interaction::BasicQuestion(q) => Some(q),
            Interaction::Echo(_) | Interaction::Acknowledge(_) => None,
        }
    }

    /// The interaction as a displayable, if it is one
    pub fn as_displayable(&self) -> Option<&dyn Displayable> {
        match self {
            Interaction::Echo(d) => Some(d),
            Interaction::Acknowledge(d) => Some(d),
            Interaction::Confirm(_) | Interaction::Choice(_) | Interaction::BasicQuestion(_) => None,
        }
    }

    /// Short name of the variant, as used in configuration
    pub fn kind(&self) -> &'static str {
        match self {
            Interaction::Echo(_) => "echo",
            Interaction::Acknowledge(_) => "acknowledge",
            Interaction::Confirm(_) => "confirm",
            Interaction::Choice(_) => "choice",
            Interaction::BasicQuestion(_) => "basic_question",
        }
    }
}

impl From<Echo> for Interaction {
    fn from(value: Echo) -> Self {
        Interaction::Echo(value)
    }
}

impl From<Acknowledge> for Interaction {
    fn from(value: Acknowledge) -> Self {
        Interaction::Acknowledge(value)
    }
}

impl From<Confirm> for Interaction {
    fn from(value: Confirm) -> Self {
        Interaction::Confirm(value)
    }
}

impl From<Choice> for Interaction {
    fn from(value: Choice) -> Self {
        Interaction::Choice(value)
    }
}

impl From<BasicQuestion> for Interaction {
    fn from(value: BasicQuestion) -> Self {
        Interaction::BasicQuestion(value)
    }
}

/// Construction check shared by all questions: a value-if-not-asked without a
/// should-ask predicate could never be used.
pub(crate) fn check_not_asked_reachable(
    name: &str,
    has_value_if_not_asked: bool,
    should_ask: Option<&ShouldAsk>,
) -> InteractionResult<()> {
    if has_value_if_not_asked && should_ask.is_none() {
        return Err(InteractionError::NotAskedWithoutShouldAsk(name.to_string()));
    }
    Ok(())
}
