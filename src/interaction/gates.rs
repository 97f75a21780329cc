//! Should-ask predicates and free-text validators.
//!
//! Both come in two shapes: a Rust closure, or a loosely typed value declared
//! in configuration. A declared value is only interpreted when it is
//! evaluated, so a malformed one surfaces as [`InteractionError::InvalidPredicate`]
//! or [`InteractionError::InvalidValidator`] at that point.

use crate::error::{InteractionError, InteractionResult};
use crate::types::{Answer, Answers, ValidationResult};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Predicate over the answers collected so far
pub type PredicateFn = Arc<dyn Fn(&Answers) -> bool + Send + Sync>;

/// Validator over a candidate answer and the answers collected so far
pub type ValidatorFn = Arc<dyn Fn(&str, &Answers) -> ValidationResult + Send + Sync>;

/// Decides whether an interaction is evaluated at all.
#[derive(Clone)]
pub enum ShouldAsk {
    /// Closure predicate
    Fn(PredicateFn),
    /// Declared predicate: `{ answer = "name" }` or `{ answer = "name", equals = value }`
    Declared(serde_json::Value),
}

impl ShouldAsk {
    /// Wrap a closure predicate
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Answers) -> bool + Send + Sync + 'static,
    {
        ShouldAsk::Fn(Arc::new(f))
    }

    /// Evaluate the predicate against the answers so far
    pub fn evaluate(&self, answers: &Answers) -> InteractionResult<bool> {
        match self {
            ShouldAsk::Fn(f) => Ok(f(answers)),
            ShouldAsk::Declared(raw) => evaluate_declared_predicate(raw, answers),
        }
    }
}

fn evaluate_declared_predicate(raw: &serde_json::Value, answers: &Answers) -> InteractionResult<bool> {
    let name = raw
        .get("answer")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| InteractionError::InvalidPredicate(raw.to_string()))?;
    let answer = answers.get(name);
    Ok(match raw.get("equals") {
        Some(expected) => answer.map(Answer::to_json).as_ref() == Some(expected),
        None => answer.map(Answer::is_truthy).unwrap_or(false),
    })
}

impl fmt::Debug for ShouldAsk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShouldAsk::Fn(_) => f.write_str("ShouldAsk(<fn>)"),
            ShouldAsk::Declared(raw) => f.debug_tuple("Declared").field(raw).finish(),
        }
    }
}

/// `true` when there is no predicate, otherwise the predicate's verdict.
pub fn should_ask(predicate: Option<&ShouldAsk>, answers: &Answers) -> InteractionResult<bool> {
    match predicate {
        None => Ok(true),
        Some(predicate) => predicate.evaluate(answers),
    }
}

/// Validates free-text answers.
#[derive(Clone)]
pub enum Validator {
    /// Closure validator
    Fn(ValidatorFn),
    /// Declared validator: `{ pattern = "regex", message = "..." }`
    Declared(serde_json::Value),
}

impl Validator {
    /// Wrap a closure validator
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Answers) -> ValidationResult + Send + Sync + 'static,
    {
        Validator::Fn(Arc::new(f))
    }

    /// Validate `value`. The validator's own result is passed through unchanged.
    pub fn evaluate(&self, value: &str, answers: &Answers) -> InteractionResult<ValidationResult> {
        match self {
            Validator::Fn(f) => Ok(f(value, answers)),
            Validator::Declared(raw) => evaluate_declared_validator(raw, value),
        }
    }
}

fn evaluate_declared_validator(raw: &serde_json::Value, value: &str) -> InteractionResult<ValidationResult> {
    let pattern = raw
        .get("pattern")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| InteractionError::InvalidValidator(raw.to_string()))?;
    let regex = Regex::new(pattern)
        .map_err(|e| InteractionError::InvalidValidator(format!("{}: {}", raw, e)))?;
    if regex.is_match(value) {
        return Ok(ValidationResult::Success);
    }
    let message = match raw.get("message").and_then(serde_json::Value::as_str) {
        Some(message) => message.to_string(),
        None => format!("'{}' does not match the pattern {}", value, pattern),
    };
    Ok(ValidationResult::Failure(message))
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Fn(_) => f.write_str("Validator(<fn>)"),
            Validator::Declared(raw) => f.debug_tuple("Declared").field(raw).finish(),
        }
    }
}
