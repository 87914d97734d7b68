//! In-memory contact store.

use super::traits::ContactRepository;
use crate::models::Contact;
use std::collections::HashMap;

/// In-memory name → phone mapping that remembers insertion order.
///
/// Entries are never removed, so positions in `entries` stay valid for the
/// lifetime of the store.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    entries: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let position = *self.index.get(name)?;
        self.entries.get_mut(position)
    }
}

impl ContactRepository for ContactStore {
    fn add(&mut self, name: &str, phone: &str) -> Option<String> {
        if let Some(existing) = self.get_mut(name) {
            tracing::info!(name = %name, "Overwriting existing contact");
            return Some(std::mem::replace(&mut existing.phone, phone.to_string()));
        }

        tracing::info!(name = %name, "Adding contact");
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(Contact::new(name, phone));
        None
    }

    fn change(&mut self, name: &str, phone: &str) -> bool {
        match self.get_mut(name) {
            Some(existing) => {
                tracing::info!(name = %name, "Changing contact phone");
                existing.phone = phone.to_string();
                true
            }
            None => false,
        }
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let position = *self.index.get(name)?;
        self.entries.get(position).map(|c| c.phone.clone())
    }

    fn list_all(&self) -> Vec<Contact> {
        self.entries.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
