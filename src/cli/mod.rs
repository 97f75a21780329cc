//! CLI feature - answers from command-line flags instead of prompts
//!
//! The same interaction list that drives interactive resolution is projected
//! onto a `clap` grammar, one flag group per question:
//!
//! - **BasicQuestion** - `--name <VALUE>`
//! - **Choice** - `--name <VALUE>`, restricted to the options when they are static
//! - **Confirm** - `--name` / `--no-name`, mutually exclusive
//!
//! Parsed flags are turned back into answers with the same ordering,
//! should-ask and value-if-not-asked rules as interactive resolution, so both
//! paths agree on the final answers.
//!
//! # Example
//!
//! ```
//! use askflow::cli::parse_args;
//! use askflow::interaction::{Choice, Confirm, Interaction};
//! use askflow::types::Answer;
//!
//! let interactions: Vec<Interaction> = vec![
//!     Confirm::builder("likes_dogs", "Do you like dogs?").default(true).build().unwrap().into(),
//!     Choice::new("mood", "How are you?", ["happy", "sad"], "happy").into(),
//! ];
//!
//! let answers = parse_args(&interactions, ["--no-likes-dogs", "--mood", "sad"], None, "survey").unwrap();
//! assert_eq!(answers["likes_dogs"], Answer::Bool(false));
//! assert_eq!(answers["mood"], Answer::from("sad"));
//! ```

pub mod answers;
pub mod builder;
pub mod error;

pub use answers::{parse_args, parse_args_or_exit, parse_flags, to_answers, FlagValues};
pub use builder::{build_command, format_cli_help};
pub use error::{CliError, CliResult};
