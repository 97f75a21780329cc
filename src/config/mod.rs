//! Declaring interactions in TOML.
//!
//! A document is a list of `[[interaction]]` tables tagged with `type`.
//! Messages and defaults written as `{ answer = "name" }` resolve to a
//! previously collected answer. Choice `options` are always literal, so an
//! options map can have an `answer` key. Values are only type checked when they are resolved, so a
//! `default = "maybe"` on a confirm loads fine and fails with
//! [`InteractionError::InvalidValue`](crate::error::InteractionError::InvalidValue)
//! when the confirm is reached.
//!
//! # Example
//!
//! ```
//! use askflow::config::load_from_str;
//! use askflow::resolve::get_answers_unattended;
//! use askflow::types::Answer;
//!
//! let interactions = load_from_str(r#"
//! [[interaction]]
//! type = "choice"
//! name = "mood"
//! message = "How are you?"
//! options = ["happy", "sad"]
//! default = "happy"
//! "#).unwrap();
//!
//! let answers = get_answers_unattended(&interactions, None).unwrap();
//! assert_eq!(answers["mood"], Answer::from("happy"));
//! ```

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_from_file, load_from_str};
pub use schema::{InteractionConfig, InteractionsConfig};
