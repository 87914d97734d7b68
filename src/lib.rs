//! Contact Assistant - a console contact book.
//!
//! The assistant reads one command per line, keeps name → phone entries in
//! memory and prints a reply for every command.
//!
//! # Architecture
//!
//! - **models**: The contact entry
//! - **repositories**: Contact storage trait and the in-memory store
//! - **commands**: Command table, exit keywords and the line tokenizer
//! - **session**: The read → parse → dispatch → print loop and its handlers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{parse_input, Command, CommandKind, ParsedInput, EXIT_KEYWORDS};
pub use config::{Config, LineEditorMode};
pub use error::{CommandError, ConfigError};
pub use models::Contact;
pub use repositories::{ContactRepository, ContactStore};
pub use session::{BufReadSource, EditorSource, LineSource, ReadOutcome, Session, State};
