//! Command vocabulary of the assistant.
//!
//! [`CommandKind`] is the static command table; [`Command`] is a fully
//! validated invocation with its arguments. The tokenizer in [`parser`]
//! turns a raw line into a [`ParsedInput`], and [`Command::from_parts`]
//! applies each command's arity.

pub mod parser;

use crate::error::{CommandError, CommandResult};

pub use parser::{parse_input, CommandName, ParsedInput};

/// Keywords that end the session when they are the whole (trimmed) line.
pub const EXIT_KEYWORDS: [&str; 4] = ["x", "close", "exit", "good bye"];

/// Check whether a raw input line is an exit request.
pub fn is_exit_keyword(line: &str) -> bool {
    let normalized = line.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&normalized.as_str())
}

/// Recognized commands, in table order.
///
/// The tokenizer tries keywords in the order of [`CommandKind::ALL`] and the
/// first match wins. No keyword is currently a leading word of another, but a
/// new entry that is (e.g. `show` next to `show all`) must be placed after
/// the longer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Help,
}

impl CommandKind {
    /// The command table.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Hello,
        CommandKind::Add,
        CommandKind::Change,
        CommandKind::Phone,
        CommandKind::ShowAll,
        CommandKind::Help,
    ];

    /// Keyword as typed by the user (lower case, words separated by one space).
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Hello => "hello",
            CommandKind::Add => "add",
            CommandKind::Change => "change",
            CommandKind::Phone => "phone",
            CommandKind::ShowAll => "show all",
            CommandKind::Help => "help",
        }
    }

    /// Number of arguments the command needs. Extra arguments are ignored.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Add | CommandKind::Change => 2,
            CommandKind::Phone => 1,
            CommandKind::Hello | CommandKind::ShowAll | CommandKind::Help => 0,
        }
    }
}

/// A validated command ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowAll,
    Help,
}

impl Command {
    /// Build a command from its kind and tokenized arguments.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Input` when fewer arguments than
    /// [`CommandKind::arity`] were supplied.
    pub fn from_parts(kind: CommandKind, args: Vec<String>) -> CommandResult<Self> {
        if args.len() < kind.arity() {
            return Err(CommandError::Input);
        }

        let mut args = args.into_iter();
        let mut next = || args.next().ok_or(CommandError::Input);

        let command = match kind {
            CommandKind::Hello => Command::Hello,
            CommandKind::Add => Command::Add {
                name: next()?,
                phone: next()?,
            },
            CommandKind::Change => Command::Change {
                name: next()?,
                phone: next()?,
            },
            CommandKind::Phone => Command::Phone { name: next()? },
            CommandKind::ShowAll => Command::ShowAll,
            CommandKind::Help => Command::Help,
        };

        Ok(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Hello => CommandKind::Hello,
            Command::Add { .. } => CommandKind::Add,
            Command::Change { .. } => CommandKind::Change,
            Command::Phone { .. } => CommandKind::Phone,
            Command::ShowAll => CommandKind::ShowAll,
            Command::Help => CommandKind::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exit_keywords_any_case() {
        assert!(is_exit_keyword("exit"));
        assert!(is_exit_keyword("EXIT"));
        assert!(is_exit_keyword("Good Bye"));
        assert!(is_exit_keyword("  x  "));
        assert!(is_exit_keyword("Close"));
        assert!(!is_exit_keyword("exit now"));
        assert!(!is_exit_keyword("goodbye"));
        assert!(!is_exit_keyword(""));
    }

    #[test]
    fn test_from_parts_add() {
        let cmd = Command::from_parts(CommandKind::Add, args(&["John", "123"])).unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "John".to_string(),
                phone: "123".to_string()
            }
        );
        assert_eq!(cmd.kind(), CommandKind::Add);
    }

    #[test]
    fn test_from_parts_missing_arguments() {
        assert_eq!(
            Command::from_parts(CommandKind::Add, args(&["John"])),
            Err(CommandError::Input)
        );
        assert_eq!(
            Command::from_parts(CommandKind::Change, Vec::new()),
            Err(CommandError::Input)
        );
        assert_eq!(
            Command::from_parts(CommandKind::Phone, Vec::new()),
            Err(CommandError::Input)
        );
    }

    #[test]
    fn test_from_parts_ignores_extra_arguments() {
        let cmd = Command::from_parts(CommandKind::Phone, args(&["John", "Smith"])).unwrap();
        assert_eq!(
            cmd,
            Command::Phone {
                name: "John".to_string()
            }
        );

        let cmd = Command::from_parts(CommandKind::Hello, args(&["there"])).unwrap();
        assert_eq!(cmd, Command::Hello);
    }

    #[test]
    fn test_table_keywords_round_trip_kind() {
        for kind in CommandKind::ALL {
            let parsed = parse_input(kind.keyword());
            assert_eq!(parsed.command, CommandName::Known(kind));
        }
    }
}
