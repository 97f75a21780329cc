//! Builds interactions from the TOML schema

use super::error::{ConfigError, ConfigResult};
use super::schema::{InteractionConfig, InteractionsConfig};
use crate::error::InteractionError;
use crate::interaction::{Acknowledge, BasicQuestion, Choice, Confirm, Echo, Interaction, ShouldAsk, Validator};
use crate::types::{Answer, LabeledOptions};
use crate::value::{Value, ValueKind};
use std::path::Path;
use tracing::debug;

/// Parse interactions from a TOML string
pub fn load_from_str(content: &str) -> ConfigResult<Vec<Interaction>> {
    let config: InteractionsConfig = toml::from_str(content)?;
    config.into_interactions()
}

/// Load interactions from a TOML file
pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Vec<Interaction>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading interactions");
    load_from_str(&content)
}

impl InteractionsConfig {
    /// Build every declared interaction, in order
    pub fn into_interactions(self) -> ConfigResult<Vec<Interaction>> {
        self.interactions
            .into_iter()
            .enumerate()
            .map(|(index, config)| config.into_interaction(index))
            .collect()
    }
}

impl InteractionConfig {
    /// Build the interaction. `index` is only used in error messages.
    pub fn into_interaction(self, index: usize) -> ConfigResult<Interaction> {
        let message: Value<String> = declared(
            self.message
                .clone()
                .ok_or_else(|| ConfigError::invalid(index, "missing `message`"))?,
        );
        let should_ask = self.should_ask.clone().map(ShouldAsk::Declared);

        let interaction: Interaction = match self.kind.as_str() {
            "echo" => {
                let mut echo = Echo::new(message);
                if let Some(gate) = should_ask {
                    echo = echo.with_should_ask(gate);
                }
                echo.into()
            }
            "acknowledge" => {
                let mut acknowledge = Acknowledge::new(message);
                if let Some(gate) = should_ask {
                    acknowledge = acknowledge.with_should_ask(gate);
                }
                acknowledge.into()
            }
            "confirm" => {
                let name = self.require_name(index)?;
                let mut builder = Confirm::builder(name.clone(), message);
                if let Some(default) = self.default {
                    builder = builder.default(declared::<bool>(default));
                }
                if let Some(help) = self.cli_help {
                    builder = builder.cli_help(help);
                }
                if let Some(gate) = should_ask {
                    builder = builder.with_should_ask(gate);
                }
                if let Some(raw) = self.value_if_not_asked {
                    let value = raw
                        .as_bool()
                        .ok_or_else(|| InteractionError::not_asked(&name, format!("{} is not a boolean", raw)))?;
                    builder = builder.value_if_not_asked(value);
                }
                builder.build()?.into()
            }
            "choice" => {
                let name = self.require_name(index)?;
                let options = self
                    .options
                    .ok_or_else(|| ConfigError::invalid(index, "choice requires `options`"))?;
                let default = self
                    .default
                    .ok_or_else(|| ConfigError::invalid(index, "choice requires a `default`"))?;
                let mut builder = Choice::builder(
                    name.clone(),
                    message,
                    Value::<LabeledOptions>::Declared(options),
                    declared::<String>(default),
                );
                if let Some(help) = self.cli_help {
                    builder = builder.cli_help(help);
                }
                if let Some(gate) = should_ask {
                    builder = builder.with_should_ask(gate);
                }
                if let Some(raw) = self.value_if_not_asked {
                    builder = builder.value_if_not_asked(text_not_asked(&name, raw)?);
                }
                builder.build()?.into()
            }
            "basic_question" => {
                let name = self.require_name(index)?;
                let default = self
                    .default
                    .map(declared)
                    .unwrap_or_else(|| Value::Static(String::new()));
                let mut builder = BasicQuestion::builder(name.clone(), message, default);
                if let Some(help) = self.cli_help {
                    builder = builder.cli_help(help);
                }
                if let Some(gate) = should_ask {
                    builder = builder.with_should_ask(gate);
                }
                if let Some(raw) = self.validator {
                    builder = builder.with_validator(Validator::Declared(raw));
                }
                if let Some(raw) = self.value_if_not_asked {
                    builder = builder.value_if_not_asked(text_not_asked(&name, raw)?);
                }
                builder.build()?.into()
            }
            other => return Err(InteractionError::UnsupportedInteractionType(other.to_string()).into()),
        };

        Ok(interaction)
    }

    fn require_name(&self, index: usize) -> ConfigResult<String> {
        self.name
            .clone()
            .ok_or_else(|| ConfigError::invalid(index, format!("{} requires a `name`", self.kind)))
    }
}

/// `{ answer = "x" }` becomes a value resolved from answer `x`; anything else
/// is kept as declared and checked on resolution. Only used for scalar
/// fields, so a choice's `options` map may have a key named `answer`.
fn declared<T: ValueKind>(raw: serde_json::Value) -> Value<T> {
    match answer_reference(&raw) {
        Some(name) => Value::declared_dynamic(move |answers| {
            answers
                .get(&name)
                .map(Answer::to_json)
                .unwrap_or(serde_json::Value::Null)
        }),
        None => Value::Declared(raw),
    }
}

fn answer_reference(raw: &serde_json::Value) -> Option<String> {
    let table = raw.as_object()?;
    if table.len() != 1 {
        return None;
    }
    table.get("answer")?.as_str().map(str::to_string)
}

fn text_not_asked(name: &str, raw: serde_json::Value) -> ConfigResult<String> {
    match raw {
        serde_json::Value::String(value) => Ok(value),
        other => Err(InteractionError::not_asked(name, format!("{} is not a string", other)).into()),
    }
}
