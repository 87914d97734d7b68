//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`CommandError`] is exactly what the user sees when a
//! command fails.

use thiserror::Error;

/// Errors a command handler can report back to the session loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number or shape of arguments for the command
    #[error("[-] Input Error. Use 'help' for assistance.")]
    Input,

    /// Anything else that went wrong while running a handler
    #[error("[-] Exception: {0}")]
    Unexpected(String),
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Unexpected(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
