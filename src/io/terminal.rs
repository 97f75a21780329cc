//! Line based terminal backend.

use super::UserIo;
use crate::types::LabeledOptions;
use colored::*;
use std::io::{self, BufRead, Write};

/// [`UserIo`] over any line reader and writer, usually stdin and stdout.
pub struct TerminalIo<R, W> {
    input: R,
    output: W,
}

impl TerminalIo<io::StdinLock<'static>, io::Stdout> {
    /// Backend bound to the process' stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    /// Create a backend over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }
}

impl<R: BufRead, W: Write> UserIo for TerminalIo<R, W> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn read_line_with_default(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let line = format!("{} {}: ", prompt.bold(), format!("[{}]", default).dimmed());
        let answer = self.prompt(&line)?;
        self.write_line("")?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn read_yes_no(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let indicator = if default { "Y/n" } else { "y/N" };
        let line = format!("{} ({}): ", prompt.bold(), indicator);
        loop {
            let answer = self.prompt(&line)?.trim().to_lowercase();
            let decided = match answer.as_str() {
                "" => Some(default),
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            };
            if let Some(decided) = decided {
                self.write_line("")?;
                return Ok(decided);
            }
            self.write_line(&"Please answer y or n.".yellow().to_string())?;
        }
    }

    fn read_menu_choice(
        &mut self,
        prompt: &str,
        options: &LabeledOptions,
        default_key: &str,
    ) -> io::Result<String> {
        if options.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "options must contain at least one value",
            ));
        }
        let default_position = options
            .keys()
            .position(|key| key == default_key)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Default \"{}\" was not an option", default_key),
                )
            })?;

        self.write_line(&prompt.bold().to_string())?;
        for (index, (_, label)) in options.iter().enumerate() {
            self.write_line(&format!("{} - {}", index + 1, label))?;
        }
        self.write_line("Enter the number of your choice")?;

        let line = format!("{}: ", format!("[{}]", default_position + 1).dimmed());
        loop {
            let answer = self.prompt(&line)?;
            let answer = answer.trim();
            let chosen = if answer.is_empty() {
                Some(default_position)
            } else {
                answer
                    .parse::<usize>()
                    .ok()
                    .filter(|number| (1..=options.len()).contains(number))
                    .map(|number| number - 1)
            };
            if let Some((key, _)) = chosen.and_then(|position| options.iter().nth(position)) {
                self.write_line("")?;
                return Ok(key.to_string());
            }
            self.write_line(&format!("{} is not one of the listed numbers", answer).yellow().to_string())?;
        }
    }

    fn pause(&mut self) -> io::Result<()> {
        self.prompt("").map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> TerminalIo<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(io: TerminalIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(io.into_output()).unwrap()
    }

    #[test]
    fn test_line_with_default_uses_default_on_empty_input() {
        let mut io = terminal("\n");
        assert_eq!(io.read_line_with_default("Name?", "Patrick").unwrap(), "Patrick");
        let out = printed(io);
        assert!(out.contains("Name?"));
        assert!(out.contains("Patrick"));
    }

    #[test]
    fn test_line_with_default_returns_typed_text() {
        let mut io = terminal("Columbo\r\n");
        assert_eq!(io.read_line_with_default("Name?", "Patrick").unwrap(), "Columbo");
    }

    #[test]
    fn test_yes_no_reprompts_on_garbage() {
        let mut io = terminal("maybe\nN\n");
        assert!(!io.read_yes_no("Dogs?", true).unwrap());
        let out = printed(io);
        assert!(out.contains("Y/n"));
        assert!(out.contains("Please answer y or n."));
    }

    #[test]
    fn test_yes_no_empty_takes_default() {
        let mut io = terminal("\n");
        assert!(io.read_yes_no("Dogs?", true).unwrap());
    }

    #[test]
    fn test_menu_lists_labels_and_returns_key() {
        let options = LabeledOptions::from_pairs([("h", "Happy"), ("s", "Sad")]);
        let mut io = terminal("2\n");
        assert_eq!(io.read_menu_choice("Mood?", &options, "h").unwrap(), "s");
        let out = printed(io);
        assert!(out.contains("1 - Happy"));
        assert!(out.contains("2 - Sad"));
        assert!(out.contains("Enter the number of your choice"));
    }

    #[test]
    fn test_menu_rejects_out_of_range_then_takes_default() {
        let options = LabeledOptions::from_labels(["happy", "sad"]);
        let mut io = terminal("7\n\n");
        assert_eq!(io.read_menu_choice("Mood?", &options, "sad").unwrap(), "sad");
        assert!(printed(io).contains("7 is not one of the listed numbers"));
    }

    #[test]
    fn test_menu_default_must_be_listed() {
        let options = LabeledOptions::from_labels(["happy", "sad"]);
        let mut io = terminal("1\n");
        let err = io.read_menu_choice("Mood?", &options, "angry").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_closed_input_is_eof_error() {
        let mut io = terminal("");
        let err = io.read_line_with_default("Name?", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut io = terminal("\nnext\n");
        io.pause().unwrap();
        assert_eq!(io.read_line_with_default("Q", "d").unwrap(), "next");
    }
}
