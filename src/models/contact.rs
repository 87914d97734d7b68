//! Contact model representing one entry in the contact book.

use std::fmt;

/// A single (name, phone) entry.
///
/// The name is the unique key within a store; the phone is free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Contact name (case-sensitive key)
    pub name: String,

    /// Phone number, stored exactly as entered
    pub phone: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact: {}, Phone: {}", self.name, self.phone)
    }
}
