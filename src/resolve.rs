//! Resolution engine: walks an interaction list and collects answers.

use crate::error::{InteractionError, InteractionResult};
use crate::interaction::{Interaction, Question};
use crate::io::{SilentIo, UserIo};
use crate::names::check_duplicates;
use crate::types::{Answer, Answers};
use tracing::debug;

/// Evaluate `interactions` in order and return the collected answers.
///
/// Duplicate names are rejected before anything is displayed. Each interaction
/// sees exactly the answers produced by the interactions before it, plus the
/// pre-seeded `answers`. With `no_user_input` every question takes its default
/// and nothing blocks.
pub fn get_answers(
    interactions: &[Interaction],
    answers: Option<&Answers>,
    io: &mut dyn UserIo,
    no_user_input: bool,
) -> InteractionResult<Answers> {
    check_duplicates(interactions, answers)?;
    let mut answers = answers.cloned().unwrap_or_default();

    for interaction in interactions {
        if let Some(displayable) = interaction.as_displayable() {
            if displayable.should_display(&answers)? {
                debug!(kind = interaction.kind(), "displaying");
                displayable.display(&answers, io, no_user_input)?;
            } else {
                debug!(kind = interaction.kind(), "display skipped");
            }
            continue;
        }

        let question = interaction
            .as_question()
            .ok_or_else(|| InteractionError::UnsupportedInteractionType(interaction.kind().to_string()))?;

        if question.should_ask(&answers)? {
            debug!(question = question.name(), kind = interaction.kind(), "asking");
            let answer = question.ask(&answers, io, no_user_input)?;
            answers.insert(question.name().to_string(), answer);
        } else if let Some(answer) = not_asked_answer(question, &answers)? {
            answers.insert(question.name().to_string(), answer);
        }
    }

    Ok(answers)
}

/// [`get_answers`] without a backend: defaults only, nothing printed.
pub fn get_answers_unattended(
    interactions: &[Interaction],
    answers: Option<&Answers>,
) -> InteractionResult<Answers> {
    get_answers(interactions, answers, &mut SilentIo, true)
}

/// The answer recorded for a question that is not asked, after checking it
/// against the question's own options or validator.
pub(crate) fn not_asked_answer(question: &dyn Question, answers: &Answers) -> InteractionResult<Option<Answer>> {
    let value = match question.value_if_not_asked() {
        Some(value) => value,
        None => {
            debug!(question = question.name(), "not asked, no value recorded");
            return Ok(None);
        }
    };
    if let Some(message) = question.validate_answer(&value, answers)?.error() {
        return Err(InteractionError::not_asked(question.name(), message));
    }
    debug!(question = question.name(), value = %value, "not asked, using value_if_not_asked");
    Ok(Some(value))
}
