//! Input/output backends used to display messages and prompt for answers.
//!
//! The resolution engine never touches the terminal directly. It talks to a
//! [`UserIo`] implementation, which callers can swap for a scripted or silent
//! one in unattended runs and tests.

#[cfg(feature = "terminal")]
pub mod terminal;

#[cfg(feature = "terminal")]
pub use terminal::TerminalIo;

use crate::types::LabeledOptions;
use std::io;

/// The prompting primitives interactions are rendered with.
///
/// All calls are synchronous. The `read_*` calls and [`UserIo::pause`] block
/// until the user responds.
pub trait UserIo {
    /// Print a line of text
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Read a line of free text, returning `default` when nothing is entered
    fn read_line_with_default(&mut self, prompt: &str, default: &str) -> io::Result<String>;

    /// Ask a yes/no question
    fn read_yes_no(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Let the user pick one of `options`, returning the chosen key
    fn read_menu_choice(
        &mut self,
        prompt: &str,
        options: &LabeledOptions,
        default_key: &str,
    ) -> io::Result<String>;

    /// Block until the user presses a key
    fn pause(&mut self) -> io::Result<()>;
}

/// Backend that prints nothing and answers every prompt with its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentIo;

impl UserIo for SilentIo {
    fn write_line(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn read_line_with_default(&mut self, _prompt: &str, default: &str) -> io::Result<String> {
        Ok(default.to_string())
    }

    fn read_yes_no(&mut self, _prompt: &str, default: bool) -> io::Result<bool> {
        Ok(default)
    }

    fn read_menu_choice(
        &mut self,
        _prompt: &str,
        _options: &LabeledOptions,
        default_key: &str,
    ) -> io::Result<String> {
        Ok(default_key.to_string())
    }

    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}
