//! Stdin-based item source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for piped JSON or JSONL.
///
/// Refuses an interactive terminal so the CLI never blocks waiting for
/// keyboard input when the user forgot to pipe data.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader (for testing).
    #[cfg(test)]
    fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` on read failure or invalid UTF-8.
    pub fn read_to_string(mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
