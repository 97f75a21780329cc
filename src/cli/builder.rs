//! Flag grammar builder - converts an interaction list to a clap Command

use crate::error::{InteractionError, InteractionResult};
use crate::interaction::{Choice, Confirm, Interaction, Question};
use crate::names::{canonical_flag_name, check_duplicates};
use crate::types::Answers;
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{Arg, ArgAction, Command};
use std::collections::HashSet;

/// Arg id of the negated flag of a confirm
pub(crate) fn negated_id(name: &str) -> String {
    format!("no-{}", name)
}

/// Build the flag grammar for `interactions`.
///
/// Every question contributes flags under its canonical name; displayables
/// contribute nothing. The argument list is expected without a binary name.
/// Fails on duplicate names, and on any two questions that would emit the
/// same long flag, e.g. a confirm `dogs` (`--no-dogs`) and a question `no_dogs`.
pub fn build_command(interactions: &[Interaction], parser_name: &str) -> InteractionResult<Command> {
    check_duplicates(interactions, None)?;
    check_flag_longs(interactions)?;
    let mut cmd = Command::new(parser_name.to_string())
        .no_binary_name(true)
        .disable_help_flag(true);

    for interaction in interactions {
        match interaction {
            Interaction::Confirm(confirm) => {
                let (yes, no) = build_confirm_args(confirm);
                cmd = cmd.arg(yes).arg(no);
            }
            Interaction::Choice(choice) => cmd = cmd.arg(build_choice_arg(choice)?),
            Interaction::BasicQuestion(question) => cmd = cmd.arg(value_arg(question)),
            Interaction::Echo(_) | Interaction::Acknowledge(_) => {}
        }
    }

    Ok(cmd)
}

/// Long flags emitted for one question, without the leading dashes
fn flag_longs(interaction: &Interaction) -> Vec<String> {
    match interaction {
        Interaction::Confirm(confirm) => vec![
            canonical_flag_name(confirm.name()),
            negated_long(confirm.name()),
        ],
        Interaction::Choice(choice) => vec![canonical_flag_name(choice.name())],
        Interaction::BasicQuestion(question) => vec![canonical_flag_name(question.name())],
        Interaction::Echo(_) | Interaction::Acknowledge(_) => Vec::new(),
    }
}

fn check_flag_longs(interactions: &[Interaction]) -> InteractionResult<()> {
    let mut used = HashSet::new();
    for interaction in interactions {
        for long in flag_longs(interaction) {
            if !used.insert(long) {
                let name = interaction.as_question().map(|q| q.name()).unwrap_or_default();
                return Err(InteractionError::DuplicateQuestionName(name.to_string()));
            }
        }
    }
    Ok(())
}

fn negated_long(name: &str) -> String {
    canonical_flag_name(&format!("no-{}", name))
}

/// Rendered help text of the flag grammar
pub fn format_cli_help(interactions: &[Interaction], parser_name: &str) -> InteractionResult<String> {
    let mut cmd = build_command(interactions, parser_name)?;
    Ok(cmd.render_help().to_string())
}

fn value_arg(question: &dyn Question) -> Arg {
    let mut arg = Arg::new(question.name().to_string())
        .long(canonical_flag_name(question.name()))
        .action(ArgAction::Set);
    if let Some(help) = question.cli_help() {
        arg = arg.help(help.to_string());
    }
    arg
}

/// Static options restrict the accepted values; dynamic ones are checked
/// when answers are assembled.
fn build_choice_arg(choice: &Choice) -> InteractionResult<Arg> {
    let arg = value_arg(choice);
    if choice.options().is_dynamic() {
        return Ok(arg);
    }
    let options = choice.labeled_options(&Answers::new())?;
    let values = options.keys().map(|key| PossibleValue::new(key.to_string()));
    Ok(arg.value_parser(PossibleValuesParser::new(values)))
}

fn build_confirm_args(confirm: &Confirm) -> (Arg, Arg) {
    let name = confirm.name();
    let no_id = negated_id(name);

    let mut yes = Arg::new(name.to_string())
        .long(canonical_flag_name(name))
        .action(ArgAction::SetTrue)
        .conflicts_with(no_id.clone());
    if let Some(help) = confirm.cli_help() {
        yes = yes.help(help.to_string());
    }

    let no = Arg::new(no_id)
        .long(negated_long(name))
        .action(ArgAction::SetTrue);

    (yes, no)
}
