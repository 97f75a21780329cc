//! Configuration schema for declared interactions
//!
//! Defines the TOML structure. Values that may be static or dynamic are kept
//! loosely typed and only checked when they are resolved.

use serde::{Deserialize, Serialize};

/// Root of an interactions document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionsConfig {
    /// Interactions in declaration order
    #[serde(default, rename = "interaction")]
    pub interactions: Vec<InteractionConfig>,
}

/// One `[[interaction]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionConfig {
    /// `echo`, `acknowledge`, `confirm`, `choice` or `basic_question`
    #[serde(rename = "type")]
    pub kind: String,

    /// Question identifier (questions only)
    #[serde(default)]
    pub name: Option<String>,

    /// Message text, or `{ answer = "..." }`
    #[serde(default)]
    pub message: Option<serde_json::Value>,

    /// Default answer, or `{ answer = "..." }`
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Choice options: a list of labels, a list of `{ value, label }` tables,
    /// or a `value = label` map kept in declared order
    #[serde(default)]
    pub options: Option<serde_json::Value>,

    /// Help text of the command-line flag
    #[serde(default)]
    pub cli_help: Option<String>,

    /// `{ answer = "..." }` or `{ answer = "...", equals = ... }`
    #[serde(default)]
    pub should_ask: Option<serde_json::Value>,

    /// `{ pattern = "...", message = "..." }` (basic questions)
    #[serde(default)]
    pub validator: Option<serde_json::Value>,

    /// Answer recorded when the question is not asked
    #[serde(default)]
    pub value_if_not_asked: Option<serde_json::Value>,
}
