//! Contact Assistant - Main entry point
//!
//! Prints the welcome banner and runs the interactive command loop on
//! stdin/stdout until the user exits.

use anyhow::{Context, Result};
use contact_assistant::{BufReadSource, Config, EditorSource, LineSource, Session};
use std::io::{self, IsTerminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging is not set up yet; anyhow reports the failure on exit
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout stays the conversation with the user
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let use_editor = config.line_editor.use_editor(io::stdin().is_terminal());
    info!(use_editor, "Configuration loaded");

    let mut input: Box<dyn LineSource> = if use_editor {
        Box::new(EditorSource::new())
    } else {
        Box::new(BufReadSource::new(io::stdin().lock()))
    };

    let mut out = io::stdout().lock();
    let mut session = Session::new().with_prompt(config.prompt);

    session.welcome(&mut out)?;
    if let Err(e) = session.run(input.as_mut(), &mut out) {
        error!("Session ended with output error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
