//! Line-oriented console I/O for the command loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::CommandError;

/// Console wrapper over an input reader and an output writer.
///
/// Generic so the loop can be driven from stdin/stdout or from an in-memory
/// script in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Shows `message` and reads one trimmed line. `None` means end of input.
    pub fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads a value that must be present. Empty input or end of input aborts.
    pub fn ask_required(&mut self, message: &str, what: &str) -> Result<String, CommandError> {
        match self.ask(message)? {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Err(CommandError::Aborted(format!("{what} is required"))),
        }
    }

    /// Reads a value, falling back to `default` on empty input.
    ///
    /// End of input aborts since the field can no longer be answered.
    pub fn ask_or_default(
        &mut self,
        message: &str,
        default: &str,
        what: &str,
    ) -> Result<String, CommandError> {
        match self.ask(&format!("{message} [{default}]: "))? {
            Some(answer) if answer.is_empty() => Ok(default.to_string()),
            Some(answer) => Ok(answer),
            None => Err(CommandError::Aborted(format!("no {what} given"))),
        }
    }
}

/// Upper-cases the first character, for messages built from lower-case error text.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_and_detects_end_of_input() {
        let mut c = console("  hello \n");
        assert_eq!(c.ask("> ").ok().flatten().as_deref(), Some("hello"));
        assert_eq!(c.ask("> ").ok().flatten(), None);
        assert_eq!(String::from_utf8_lossy(c.output()), "> > ");
    }

    #[test]
    fn required_field_aborts_on_blank() {
        let mut c = console("\n");
        let err = c.ask_required("Name: ", "scenario name").expect_err("must abort");
        assert!(matches!(err, CommandError::Aborted(_)));
    }

    #[test]
    fn default_used_on_blank_but_not_on_eof() {
        let mut c = console("\nvalue\n");
        assert_eq!(c.ask_or_default("Field", "dflt", "field").ok().as_deref(), Some("dflt"));
        assert_eq!(c.ask_or_default("Field", "dflt", "field").ok().as_deref(), Some("value"));
        assert!(matches!(
            c.ask_or_default("Field", "dflt", "field"),
            Err(CommandError::Aborted(_))
        ));
    }
}
