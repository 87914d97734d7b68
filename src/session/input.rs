//! Line sources for the session loop.
//!
//! A [`LineSource`] yields one line per call or reports that the user asked
//! to stop. [`EditorSource`] wraps `reedline` for terminals;
//! [`BufReadSource`] reads from any `BufRead` (piped stdin, tests).

use super::prompt::AssistantPrompt;
use reedline::{Reedline, Signal};
use std::io::{self, BufRead, Write};

/// Result of a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, without its trailing newline
    Line(String),
    /// The user asked to stop (Ctrl-C, Ctrl-D, end of input)
    Interrupted,
}

/// Something the session can read command lines from.
pub trait LineSource {
    /// Read one line, showing `prompt` first.
    ///
    /// Sources that do not render their own prompt write it to `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<ReadOutcome>;
}

/// Interactive source backed by the `reedline` line editor.
pub struct EditorSource {
    editor: Reedline,
}

impl EditorSource {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl Default for EditorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<ReadOutcome> {
        let prompt = AssistantPrompt::new(prompt);
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(ReadOutcome::Line(line)),
            Signal::CtrlC | Signal::CtrlD => Ok(ReadOutcome::Interrupted),
            #[allow(unreachable_patterns)]
            _ => Ok(ReadOutcome::Interrupted),
        }
    }
}

/// Source reading newline-terminated lines from a buffered reader.
///
/// End of input is reported as [`ReadOutcome::Interrupted`].
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<ReadOutcome> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadOutcome::Interrupted);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(ReadOutcome::Line(line))
    }
}
