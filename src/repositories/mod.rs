//! Contact storage.
//!
//! The session talks to storage through the [`ContactRepository`] trait;
//! [`ContactStore`] is the in-memory implementation used by the binary.

mod contact_store;
mod traits;

pub use contact_store::ContactStore;
pub use traits::ContactRepository;
