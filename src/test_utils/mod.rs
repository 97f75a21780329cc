//! Test utilities and mock implementations for resolution testing
//!
//! Provides a scripted `UserIo` backend so interactions can be exercised
//! without a terminal.

pub mod mocks;

pub use mocks::{IoCall, ScriptedIo};
