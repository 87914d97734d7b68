//! The interactive command loop.
//!
//! A [`Session`] owns the contact store and drives the read → parse →
//! dispatch → print cycle until the user exits or interrupts.

pub mod handlers;
pub mod input;
pub mod messages;
mod prompt;

pub use input::{BufReadSource, EditorSource, LineSource, ReadOutcome};

use crate::commands::{is_exit_keyword, parse_input, Command, CommandName};
use crate::config::DEFAULT_PROMPT;
use crate::repositories::{ContactRepository, ContactStore};
use messages::{FAREWELL, UNRECOGNIZED_COMMAND, WELCOME_BANNER};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Loop state after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// An assistant session over a contact repository.
pub struct Session<R = ContactStore> {
    store: R,
    prompt: String,
}

impl Session<ContactStore> {
    /// Create a session with an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(ContactStore::new())
    }
}

impl Default for Session<ContactStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ContactRepository> Session<R> {
    /// Create a session over an existing repository.
    pub fn with_store(store: R) -> Self {
        Self {
            store,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Replace the prompt shown before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Print the one-time welcome banner.
    pub fn welcome<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", WELCOME_BANNER)
    }

    /// Run the loop until an exit keyword or an interrupt, then say goodbye.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails. Read failures end the
    /// session the same way an interrupt does.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> io::Result<()>
    where
        I: LineSource + ?Sized,
        W: Write,
    {
        info!("Session started");

        loop {
            let line = match input.read_line(&self.prompt, out) {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Interrupted) => {
                    info!("Input interrupted");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read input, ending session");
                    break;
                }
            };

            if self.handle_line(&line, out)? == State::Terminated {
                break;
            }
        }

        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        info!(contacts = self.store.len(), "Session finished");
        Ok(())
    }

    /// Handle one input line: exit check, parse, dispatch, print.
    pub fn handle_line<W: Write + ?Sized>(&mut self, line: &str, out: &mut W) -> io::Result<State> {
        if is_exit_keyword(line) {
            debug!(line = %line.trim(), "Exit keyword received");
            return Ok(State::Terminated);
        }

        let parsed = parse_input(line);
        let kind = match parsed.command {
            CommandName::Known(kind) => kind,
            CommandName::Unknown(name) => {
                debug!(command = %name, "Unrecognized command");
                writeln!(out, "{}", UNRECOGNIZED_COMMAND)?;
                return Ok(State::Running);
            }
        };

        debug!(command = kind.keyword(), args = parsed.args.len(), "Dispatching command");

        let outcome = match Command::from_parts(kind, parsed.args) {
            Ok(command) => handlers::execute(&mut self.store, command, out),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Some(reply)) if !reply.is_empty() => writeln!(out, "{}", reply)?,
            Ok(_) => {}
            Err(e) => {
                warn!(command = kind.keyword(), error = ?e, "Command failed");
                writeln!(out, "{}", e)?;
            }
        }

        Ok(State::Running)
    }
}
