//! Answer assembly from parsed flags

use super::builder::{build_command, negated_id};
use super::error::{CliError, CliResult};
use crate::error::{InteractionError, InteractionResult};
use crate::interaction::{Interaction, Question};
use crate::names::{canonical_arg_name, check_duplicates};
use crate::resolve::not_asked_answer;
use crate::types::{Answer, Answers};
use clap::error::ErrorKind;
use clap::ArgMatches;
use std::collections::HashMap;
use tracing::debug;

/// Flat question name to raw flag value map. Absent flags have no entry.
pub type FlagValues = HashMap<String, Answer>;

/// Read the flags of every question out of clap's matches
pub fn parse_flags(interactions: &[Interaction], matches: &ArgMatches) -> FlagValues {
    let mut values = FlagValues::new();
    for interaction in interactions {
        match interaction {
            Interaction::Confirm(confirm) => {
                let name = confirm.name();
                if matches.get_flag(name) {
                    values.insert(name.to_string(), Answer::Bool(true));
                } else if matches.get_flag(&negated_id(name)) {
                    values.insert(name.to_string(), Answer::Bool(false));
                }
            }
            Interaction::Choice(_) | Interaction::BasicQuestion(_) => {
                if let Some(question) = interaction.as_question() {
                    if let Some(value) = matches.get_one::<String>(question.name()) {
                        values.insert(question.name().to_string(), Answer::Text(value.clone()));
                    }
                }
            }
            Interaction::Echo(_) | Interaction::Acknowledge(_) => {}
        }
    }
    values
}

/// Assemble answers from already parsed flag values.
///
/// Follows the same order and should-ask rules as interactive resolution. A
/// question without a flag takes its default; text answers are validated and
/// a failure is reported against the question's flag.
pub fn to_answers(
    interactions: &[Interaction],
    flag_values: &FlagValues,
    answers: Option<&Answers>,
) -> CliResult<Answers> {
    check_duplicates(interactions, answers)?;
    let mut answers = answers.cloned().unwrap_or_default();

    for interaction in interactions {
        let question = match interaction.as_question() {
            Some(question) => question,
            None => continue,
        };
        let name = question.name();

        if !question.should_ask(&answers)? {
            if let Some(answer) = not_asked_answer(question, &answers)? {
                answers.insert(name.to_string(), answer);
            }
            continue;
        }

        let answer = match flag_values.get(name) {
            Some(value) => value.clone(),
            None => default_answer(interaction, &answers)?,
        };
        if let Interaction::Choice(_) | Interaction::BasicQuestion(_) = interaction {
            if let Some(message) = question.validate_answer(&answer, &answers)?.error() {
                return Err(CliError::invalid_value(answer.to_string(), canonical_arg_name(name), message));
            }
        }
        debug!(question = name, value = %answer, "answer from flags");
        answers.insert(name.to_string(), answer);
    }

    Ok(answers)
}

fn default_answer(interaction: &Interaction, answers: &Answers) -> InteractionResult<Answer> {
    Ok(match interaction {
        Interaction::Confirm(confirm) => Answer::Bool(confirm.default_value().resolve(answers)?),
        Interaction::Choice(choice) => Answer::Text(choice.default_value().resolve(answers)?),
        Interaction::BasicQuestion(question) => Answer::Text(question.default_value().resolve(answers)?),
        Interaction::Echo(_) | Interaction::Acknowledge(_) => {
            return Err(InteractionError::UnsupportedInteractionType(
                interaction.kind().to_string(),
            ))
        }
    })
}

/// Parse `args` (without the binary name) against the flag grammar of
/// `interactions` and assemble the answers.
pub fn parse_args<I, T>(
    interactions: &[Interaction],
    args: I,
    answers: Option<&Answers>,
    parser_name: &str,
) -> CliResult<Answers>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    check_duplicates(interactions, answers)?;
    let matches = build_command(interactions, parser_name)?.try_get_matches_from(args)?;
    let flag_values = parse_flags(interactions, &matches);
    to_answers(interactions, &flag_values, answers)
}

/// Like [`parse_args`], but user errors print a usage message and exit the
/// process. Declaration errors are still returned.
pub fn parse_args_or_exit<I, T>(
    interactions: &[Interaction],
    args: I,
    answers: Option<&Answers>,
    parser_name: &str,
) -> InteractionResult<Answers>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match parse_args(interactions, args, answers, parser_name) {
        Ok(answers) => Ok(answers),
        Err(CliError::Interaction(err)) => Err(err),
        Err(CliError::Usage(err)) => err.exit(),
        Err(err @ CliError::InvalidValue { .. }) => {
            let mut cmd = build_command(interactions, parser_name)?;
            cmd.error(ErrorKind::InvalidValue, err.to_string()).exit()
        }
    }
}
