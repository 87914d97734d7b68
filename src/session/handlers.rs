//! Command handlers.
//!
//! Each handler returns `Ok(Some(text))` for a reply to print, `Ok(None)`
//! when it already wrote its own output, or a [`CommandError`](crate::error::CommandError) that the
//! session renders in place of a reply.

use super::messages::{
    CONTACT_ADDED, DATABASE_EMPTY, GREETING, HELP_ENTRIES, NO_MATCHING_RECORDS, PHONE_CHANGED,
    RECORD_NOT_FOUND,
};
use crate::commands::Command;
use crate::error::CommandResult;
use crate::repositories::ContactRepository;
use std::io::Write;

/// Run a validated command against the store.
pub fn execute<R, W>(store: &mut R, command: Command, out: &mut W) -> CommandResult<Option<String>>
where
    R: ContactRepository + ?Sized,
    W: Write + ?Sized,
{
    match command {
        Command::Hello => Ok(Some(GREETING.to_string())),
        Command::Add { name, phone } => add(store, &name, &phone),
        Command::Change { name, phone } => change(store, &name, &phone),
        Command::Phone { name } => phone(store, &name),
        Command::ShowAll => Ok(Some(show_all(store))),
        Command::Help => help(out).map(|_| None),
    }
}

fn add<R: ContactRepository + ?Sized>(
    store: &mut R,
    name: &str,
    phone: &str,
) -> CommandResult<Option<String>> {
    store.add(name, phone);
    Ok(Some(CONTACT_ADDED.to_string()))
}

fn change<R: ContactRepository + ?Sized>(
    store: &mut R,
    name: &str,
    phone: &str,
) -> CommandResult<Option<String>> {
    let reply = if store.change(name, phone) {
        PHONE_CHANGED
    } else {
        NO_MATCHING_RECORDS
    };
    Ok(Some(reply.to_string()))
}

fn phone<R: ContactRepository + ?Sized>(store: &R, name: &str) -> CommandResult<Option<String>> {
    let reply = store
        .lookup(name)
        .unwrap_or_else(|| RECORD_NOT_FOUND.to_string());
    Ok(Some(reply))
}

/// Render every contact, one per line, or the empty-database notice.
pub fn show_all<R: ContactRepository + ?Sized>(store: &R) -> String {
    let contacts = store.list_all();
    if contacts.is_empty() {
        return DATABASE_EMPTY.to_string();
    }

    contacts
        .iter()
        .map(|contact| contact.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the help table straight to the output stream.
pub fn help<W: Write + ?Sized>(out: &mut W) -> CommandResult<()> {
    writeln!(out, "\n")?;
    for (keyword, description) in HELP_ENTRIES {
        writeln!(out, "{:<9} - {}", keyword, description)?;
    }
    writeln!(out, "\n")?;
    Ok(())
}
