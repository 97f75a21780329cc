//! Question identifiers and their command-line flag forms.

use crate::error::{InteractionError, InteractionResult};
use crate::interaction::Interaction;
use crate::types::Answers;
use std::collections::HashSet;

/// Flag name without the leading dashes.
///
/// Lowercases, turns spaces and underscores into dashes, collapses runs of
/// dashes and trims them from both ends.
pub fn canonical_flag_name(name: &str) -> String {
    let mut flag = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        let c = if c == ' ' || c == '_' { '-' } else { c };
        if c == '-' && (flag.is_empty() || flag.ends_with('-')) {
            continue;
        }
        flag.push(c);
    }
    while flag.ends_with('-') {
        flag.pop();
    }
    flag
}

/// Canonical command-line argument for a question name, e.g. `--likes-dogs`
pub fn canonical_arg_name(name: &str) -> String {
    format!("--{}", canonical_flag_name(name))
}

/// Reject interaction lists where two questions, or a question and a
/// pre-seeded answer, would bind the same key or the same flag.
pub fn check_duplicates(interactions: &[Interaction], answers: Option<&Answers>) -> InteractionResult<()> {
    let mut used: HashSet<String> = answers
        .map(|answers| answers.keys().cloned().collect())
        .unwrap_or_default();

    for question in interactions.iter().filter_map(Interaction::as_question) {
        let name = question.name();
        let arg = canonical_arg_name(name);
        if used.contains(name) || used.contains(&arg) {
            return Err(InteractionError::DuplicateQuestionName(name.to_string()));
        }
        used.insert(name.to_string());
        used.insert(arg);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{BasicQuestion, Confirm, Echo};
    use crate::types::Answer;

    #[test]
    fn test_canonical_arg_name() {
        assert_eq!(canonical_arg_name("Foo__Bar baz-"), "--foo-bar-baz");
        assert_eq!(canonical_arg_name("likes_dogs"), "--likes-dogs");
        assert_eq!(canonical_arg_name("__x"), "--x");
        assert_eq!(canonical_flag_name("a - b"), "a-b");
    }

    #[test]
    fn test_canonical_collision_is_duplicate() {
        let interactions: Vec<Interaction> = vec![
            BasicQuestion::new("Foo Bar", "?", "").into(),
            BasicQuestion::new("foo__bar", "?", "").into(),
        ];
        let err = check_duplicates(&interactions, None).unwrap_err();
        assert_eq!(err.to_string(), "foo__bar has already been used");
    }

    #[test]
    fn test_preseeded_answer_is_duplicate() {
        let interactions: Vec<Interaction> = vec![Confirm::new("likes_dogs", "Dogs?").into()];
        let mut answers = Answers::new();
        answers.insert("likes_dogs".to_string(), Answer::Bool(true));
        assert!(check_duplicates(&interactions, Some(&answers))
            .unwrap_err()
            .is_duplicate_name());
    }

    #[test]
    fn test_displayables_are_ignored() {
        let interactions: Vec<Interaction> = vec![
            Echo::new("one").into(),
            Echo::new("one").into(),
            Confirm::new("a", "A?").into(),
            Confirm::new("b", "B?").into(),
        ];
        assert!(check_duplicates(&interactions, None).is_ok());
    }
}
