use contact_assistant::models::Contact;
use contact_assistant::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Clones share state, so a test can hand one clone to a session and keep
/// another to inspect contacts and call counts afterwards.
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a contact without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, name: &str, phone: &str) -> Option<String> {
        self.track_call("add");

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.phone, phone.to_string())),
            None => {
                contacts.push(Contact::new(name, phone));
                None
            }
        }
    }

    fn change(&mut self, name: &str, phone: &str) -> bool {
        self.track_call("change");

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                existing.phone = phone.to_string();
                true
            }
            None => false,
        }
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.track_call("lookup");

        let contacts = self.contacts.lock().unwrap();
        contacts
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.phone.clone())
    }

    fn list_all(&self) -> Vec<Contact> {
        self.track_call("list_all");
        self.contacts()
    }

    fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}
