//! Integration tests for interactions declared in TOML files

use askflow::cli::{parse_args, CliError};
use askflow::config::{load_from_file, ConfigError};
use askflow::types::Answer;
use askflow::{get_answers_unattended, InteractionError};
use std::io::Write;
use tempfile::NamedTempFile;

const PET_SURVEY: &str = r#"
[[interaction]]
type = "echo"
message = "Pet survey"

[[interaction]]
type = "confirm"
name = "has_pet"
message = "Do you have a pet?"
default = false
cli_help = "Whether you own a pet"

[[interaction]]
type = "choice"
name = "species"
message = "Which kind?"
options = [{ value = "cat", label = "A cat" }, { value = "dog", label = "A dog" }]
default = "cat"
should_ask = { answer = "has_pet" }
value_if_not_asked = "dog"

[[interaction]]
type = "basic_question"
name = "pet_name"
message = "Its name?"
default = "Tom"
should_ask = { answer = "species", equals = "cat" }
validator = { pattern = "^[A-Z][a-z]+$", message = "One capitalized word" }
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file_unattended() {
    let file = write_config(PET_SURVEY);
    let interactions = load_from_file(file.path()).unwrap();
    assert_eq!(interactions.len(), 4);

    let answers = get_answers_unattended(&interactions, None).unwrap();
    assert_eq!(answers["has_pet"], Answer::Bool(false));
    assert_eq!(answers["species"], Answer::from("dog"));
    assert!(!answers.contains_key("pet_name"));
}

#[test]
fn test_loaded_interactions_drive_flags() {
    let file = write_config(PET_SURVEY);
    let interactions = load_from_file(file.path()).unwrap();

    let answers = parse_args(&interactions, ["--has-pet", "--pet-name", "Felix"], None, "pets").unwrap();
    assert_eq!(answers["species"], Answer::from("cat"));
    assert_eq!(answers["pet_name"], Answer::from("Felix"));

    let err = parse_args(&interactions, ["--has-pet", "--pet-name", "felix"], None, "pets").unwrap_err();
    match err {
        CliError::InvalidValue { flag, message, .. } => {
            assert_eq!(flag, "--pet-name");
            assert_eq!(message, "One capitalized word");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_static_declared_options_restrict_flag() {
    let file = write_config(PET_SURVEY);
    let interactions = load_from_file(file.path()).unwrap();
    let err = parse_args(&interactions, ["--has-pet", "--species", "fish"], None, "pets").unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_bad_validator_fails_when_used() {
    let file = write_config(
        r#"
[[interaction]]
type = "basic_question"
name = "code"
message = "Code?"
default = "x"
validator = { pattern = "([unclosed" }
"#,
    );
    let interactions = load_from_file(file.path()).unwrap();
    let err = get_answers_unattended(&interactions, None).unwrap_err();
    assert!(matches!(err, InteractionError::InvalidValidator(_)));
}

#[test]
fn test_duplicate_names_in_file() {
    let file = write_config(
        r#"
[[interaction]]
type = "confirm"
name = "Likes Dogs"
message = "?"

[[interaction]]
type = "confirm"
name = "likes_dogs"
message = "?"
"#,
    );
    let interactions = load_from_file(file.path()).unwrap();
    let err = get_answers_unattended(&interactions, None).unwrap_err();
    assert!(err.is_duplicate_name());
}
