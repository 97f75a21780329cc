//! Mock implementation of the `UserIo` backend for testing

use crate::io::UserIo;
use crate::types::LabeledOptions;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// A call made against [`ScriptedIo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoCall {
    WriteLine(String),
    ReadLine { prompt: String, default: String },
    YesNo { prompt: String, default: bool },
    Menu { prompt: String, default: String },
    Pause,
}

/// Mock backend answering prompts from queued responses.
///
/// When a queue runs dry the prompt answers with its default, as if the
/// user just pressed ENTER.
#[derive(Clone, Default)]
pub struct ScriptedIo {
    pub lines: Arc<Mutex<VecDeque<String>>>,
    pub yes_no: Arc<Mutex<VecDeque<bool>>>,
    pub menu_choices: Arc<Mutex<VecDeque<String>>>,
    pub calls: Arc<Mutex<Vec<IoCall>>>,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.lock().unwrap().extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn with_yes_no<I: IntoIterator<Item = bool>>(self, answers: I) -> Self {
        self.yes_no.lock().unwrap().extend(answers);
        self
    }

    pub fn with_menu_choices<I, S>(self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu_choices
            .lock()
            .unwrap()
            .extend(choices.into_iter().map(Into::into));
        self
    }

    pub fn calls(&self) -> Vec<IoCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Lines written with `write_line`
    pub fn written(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                IoCall::WriteLine(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Number of blocking reads, i.e. everything except `write_line`
    pub fn prompt_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| !matches!(call, IoCall::WriteLine(_)))
            .count()
    }

    fn record(&self, call: IoCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl UserIo for ScriptedIo {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.record(IoCall::WriteLine(text.to_string()));
        Ok(())
    }

    fn read_line_with_default(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        self.record(IoCall::ReadLine {
            prompt: prompt.to_string(),
            default: default.to_string(),
        });
        let line = self.lines.lock().unwrap().pop_front();
        Ok(match line {
            Some(line) if !line.is_empty() => line,
            _ => default.to_string(),
        })
    }

    fn read_yes_no(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        self.record(IoCall::YesNo {
            prompt: prompt.to_string(),
            default,
        });
        Ok(self.yes_no.lock().unwrap().pop_front().unwrap_or(default))
    }

    fn read_menu_choice(
        &mut self,
        prompt: &str,
        _options: &LabeledOptions,
        default_key: &str,
    ) -> io::Result<String> {
        self.record(IoCall::Menu {
            prompt: prompt.to_string(),
            default: default_key.to_string(),
        });
        let choice = self.menu_choices.lock().unwrap().pop_front();
        Ok(choice.unwrap_or_else(|| default_key.to_string()))
    }

    fn pause(&mut self) -> io::Result<()> {
        self.record(IoCall::Pause);
        Ok(())
    }
}
