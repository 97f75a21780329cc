//! Display-only interactions.

use super::gates::{should_ask, ShouldAsk};
use super::Displayable;
use crate::error::InteractionResult;
use crate::io::UserIo;
use crate::types::Answers;
use crate::value::Value;

/// Fields that can be replaced by [`Echo::copy_with`] and [`Acknowledge::copy_with`].
///
/// `None` leaves the field unchanged. `Some(None)` clears the predicate.
#[derive(Debug, Clone, Default)]
pub struct DisplayOverrides {
    /// Replacement message
    pub message: Option<Value<String>>,
    /// Replacement predicate
    pub should_ask: Option<Option<ShouldAsk>>,
}

/// Print a message.
#[derive(Debug, Clone)]
pub struct Echo {
    message: Value<String>,
    should_ask: Option<ShouldAsk>,
}

impl Echo {
    /// Create an echo that is always displayed
    pub fn new(message: impl Into<Value<String>>) -> Self {
        Self {
            message: message.into(),
            should_ask: None,
        }
    }

    /// Only display when `predicate` holds
    pub fn display_if<F>(self, predicate: F) -> Self
    where
        F: Fn(&Answers) -> bool + Send + Sync + 'static,
    {
        self.with_should_ask(ShouldAsk::new(predicate))
    }

    /// Only display when `gate` holds
    pub fn with_should_ask(mut self, gate: ShouldAsk) -> Self {
        self.should_ask = Some(gate);
        self
    }

    /// Message text, possibly dynamic
    pub fn message(&self) -> &Value<String> {
        &self.message
    }

    /// A new echo like this one with the given fields replaced
    pub fn copy_with(&self, overrides: DisplayOverrides) -> Self {
        Self {
            message: overrides.message.unwrap_or_else(|| self.message.clone()),
            should_ask: overrides.should_ask.unwrap_or_else(|| self.should_ask.clone()),
        }
    }
}

impl Displayable for Echo {
    fn should_display(&self, answers: &Answers) -> InteractionResult<bool> {
        should_ask(self.should_ask.as_ref(), answers)
    }

    fn display(&self, answers: &Answers, io: &mut dyn UserIo, _no_user_input: bool) -> InteractionResult<()> {
        io.write_line(&self.message.resolve(answers)?)?;
        Ok(())
    }
}

/// Print a message and wait for the user to press ENTER.
#[derive(Debug, Clone)]
pub struct Acknowledge {
    message: Value<String>,
    should_ask: Option<ShouldAsk>,
}

impl Acknowledge {
    /// Create an acknowledge that is always displayed
    pub fn new(message: impl Into<Value<String>>) -> Self {
        Self {
            message: message.into(),
            should_ask: None,
        }
    }

    /// Only display when `predicate` holds
    pub fn display_if<F>(self, predicate: F) -> Self
    where
        F: Fn(&Answers) -> bool + Send + Sync + 'static,
    {
        self.with_should_ask(ShouldAsk::new(predicate))
    }

    /// Only display when `gate` holds
    pub fn with_should_ask(mut self, gate: ShouldAsk) -> Self {
        self.should_ask = Some(gate);
        self
    }

    /// Message text, possibly dynamic
    pub fn message(&self) -> &Value<String> {
        &self.message
    }

    /// A new acknowledge like this one with the given fields replaced
    pub fn copy_with(&self, overrides: DisplayOverrides) -> Self {
        Self {
            message: overrides.message.unwrap_or_else(|| self.message.clone()),
            should_ask: overrides.should_ask.unwrap_or_else(|| self.should_ask.clone()),
        }
    }
}

impl Displayable for Acknowledge {
    fn should_display(&self, answers: &Answers) -> InteractionResult<bool> {
        should_ask(self.should_ask.as_ref(), answers)
    }

    fn display(&self, answers: &Answers, io: &mut dyn UserIo, no_user_input: bool) -> InteractionResult<()> {
        io.write_line(&self.message.resolve(answers)?)?;
        if no_user_input {
            return Ok(());
        }
        io.pause()?;
        io.write_line("")?;
        Ok(())
    }
}
