//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt shown before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter your command:";

/// Whether the interactive line editor is used for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEditorMode {
    /// Use the editor only when stdin is a terminal
    #[default]
    Auto,
    /// Always use the editor
    On,
    /// Never use the editor, read stdin line by line
    Off,
}

impl LineEditorMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "on" | "true" | "1" => Some(Self::On),
            "off" | "false" | "0" => Some(Self::Off),
            _ => None,
        }
    }

    /// Resolve the mode against whether stdin is a terminal.
    pub fn use_editor(self, stdin_is_terminal: bool) -> bool {
        match self {
            Self::Auto => stdin_is_terminal,
            Self::On => true,
            Self::Off => false,
        }
    }
}

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each read (default: "Enter your command:")
    pub prompt: String,

    /// Line editor selection (default: auto)
    pub line_editor: LineEditorMode,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter your command:")
    /// - `ASSISTANT_LINE_EDITOR`: `auto`, `on` or `off` (default: `auto`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let line_editor = match env::var("ASSISTANT_LINE_EDITOR") {
            Ok(val) => LineEditorMode::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "ASSISTANT_LINE_EDITOR".to_string(),
                reason: format!("Must be one of auto, on, off, got: {}", val),
            })?,
            Err(_) => LineEditorMode::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            prompt,
            line_editor,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            line_editor: LineEditorMode::Auto,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.prompt, "Enter your command:");
        assert_eq!(config.line_editor, LineEditorMode::Auto);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", ">> ");
        guard.set("ASSISTANT_LINE_EDITOR", "OFF");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.line_editor, LineEditorMode::Off);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_PROMPT", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ASSISTANT_PROMPT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_line_editor() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_LINE_EDITOR", "sometimes");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "ASSISTANT_LINE_EDITOR");
                assert!(reason.contains("sometimes"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_line_editor_resolution() {
        assert!(LineEditorMode::Auto.use_editor(true));
        assert!(!LineEditorMode::Auto.use_editor(false));
        assert!(LineEditorMode::On.use_editor(false));
        assert!(!LineEditorMode::Off.use_editor(true));
    }
}
