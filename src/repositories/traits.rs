use crate::models::Contact;

/// Repository for managing contacts.
///
/// Every operation is total: absence of a contact is reported through the
/// return value, never as an error.
pub trait ContactRepository {
    /// Insert a contact, overwriting any existing phone for `name`.
    ///
    /// Returns the previous phone if the name was already present.
    fn add(&mut self, name: &str, phone: &str) -> Option<String>;

    /// Replace the phone of an existing contact.
    ///
    /// Returns `false` and leaves the store untouched if `name` is unknown.
    fn change(&mut self, name: &str, phone: &str) -> bool;

    /// Look up the phone stored for `name`.
    fn lookup(&self, name: &str) -> Option<String>;

    /// All contacts in insertion order.
    fn list_all(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
