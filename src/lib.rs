//! askflow - declarative interactive questionnaires
//!
//! A program declares an ordered list of interactions (messages, yes/no
//! confirmations, multiple choices and free-text questions) whose defaults,
//! visibility and options may depend on earlier answers. Two drivers consume
//! the same declaration:
//!
//! - **`resolve`** - walks the list prompting through a [`io::UserIo`] backend
//! - **`cli`** - derives the same answers from command-line flags
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! askflow = { version = "0.4", default-features = false }
//! # Or pick what you need:
//! askflow = { version = "0.4", features = ["cli", "terminal"] }
//! # Or enable everything:
//! askflow = { version = "0.4", features = ["all"] }
//! ```
//!
//! - **`cli`** - flag projection onto `clap`
//! - **`terminal`** - stdin/stdout backend
//! - **`config`** - declaring interactions in TOML
//!
//! # Example
//!
//! ```
//! use askflow::prelude::*;
//!
//! let interactions: Vec<Interaction> = vec![
//!     Echo::new("Welcome to the dog survey").into(),
//!     Confirm::builder("likes_dogs", "Do you like dogs?").default(true).build().unwrap().into(),
//!     BasicQuestion::builder("dog_name", "Your dog's name?", "Rex")
//!         .should_ask(|answers| answers.get("likes_dogs") == Some(&Answer::Bool(true)))
//!         .value_if_not_asked("none")
//!         .build()
//!         .unwrap()
//!         .into(),
//! ];
//!
//! let answers = get_answers_unattended(&interactions, None).unwrap();
//! assert_eq!(answers["dog_name"], Answer::from("Rex"));
//! ```

#![warn(missing_docs)]

/// Error taxonomy
pub mod error;

/// Interaction model
pub mod interaction;

/// Input/output backends
pub mod io;

/// Canonical flag names and the duplicate name guard
pub mod names;

/// Resolution engine
pub mod resolve;

/// Answers, validation results and option sets
pub mod types;

/// Static or dynamic values
pub mod value;

/// Flag projection (enabled with the `cli` feature)
#[cfg(feature = "cli")]
pub mod cli;

/// TOML declarations (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

#[cfg(test)]
pub mod test_utils;

pub use error::{InteractionError, InteractionResult};
pub use resolve::{get_answers, get_answers_unattended};
pub use types::{Answer, Answers, LabeledOptions, ValidationResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{InteractionError, InteractionResult};
    pub use crate::interaction::{
        Acknowledge, BasicQuestion, Choice, Confirm, Displayable, Echo, Interaction, Question,
        ShouldAsk, Validator,
    };
    pub use crate::io::{SilentIo, UserIo};
    pub use crate::resolve::{get_answers, get_answers_unattended};
    pub use crate::types::{Answer, Answers, LabeledOptions, ValidationResult};
    pub use crate::value::Value;

    #[cfg(feature = "terminal")]
    pub use crate::io::TerminalIo;

    #[cfg(feature = "cli")]
    pub use crate::cli::{parse_args, parse_args_or_exit, CliError};

    #[cfg(feature = "config")]
    pub use crate::config::{load_from_file, load_from_str, ConfigError};
}
