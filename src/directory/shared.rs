//! Thread-safe handle around a [`ContactDirectory`].

use super::ContactDirectory;
use crate::domain::ValidationResult;
use crate::models::{Contact, ContactDraft};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, thread-safe handle to one contact directory.
///
/// One lock guards every operation. Clones share the same directory.
///
/// A panic while the lock is held cannot leave the directory half-updated,
/// because every directory operation either completes or changes nothing. A
/// poisoned lock is therefore recovered rather than reported.
#[derive(Debug, Clone, Default)]
pub struct SharedContactDirectory {
    inner: Arc<RwLock<ContactDirectory>>,
}

impl SharedContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ContactDirectory::with_capacity(capacity).into()
    }

    /// See [`ContactDirectory::add`].
    pub fn add(&self, contact: impl Into<Option<Contact>>) -> ValidationResult<()> {
        self.write().add(contact)
    }

    /// See [`ContactDirectory::delete`].
    pub fn delete(&self, id: &str) -> ValidationResult<()> {
        self.write().delete(id)
    }

    /// See [`ContactDirectory::update`].
    pub fn update(
        &self,
        id: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ValidationResult<()> {
        self.write()
            .update(id, first_name, last_name, phone, address)
    }

    /// See [`ContactDirectory::update_from_draft`].
    pub fn update_from_draft(&self, id: &str, draft: ContactDraft) -> ValidationResult<()> {
        self.write().update_from_draft(id, draft)
    }

    /// Get a copy of the stored contact.
    ///
    /// A reference cannot outlive the lock guard; use
    /// [`SharedContactDirectory::with_contact`] to read in place.
    pub fn get(&self, id: &str) -> Option<Contact> {
        self.read().get(id).cloned()
    }

    /// Run `f` against the stored contact while holding the read lock.
    pub fn with_contact<R>(&self, id: &str, f: impl FnOnce(&Contact) -> R) -> Option<R> {
        self.read().get(id).map(f)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy out every stored contact, in no particular order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.read().iter().cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, ContactDirectory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContactDirectory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ContactDirectory> for SharedContactDirectory {
    fn from(directory: ContactDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn contact1() -> Contact {
        Contact::new("ID1", "Alice", "Smith", "1112223333", "1 Apple Rd").unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let directory = SharedContactDirectory::new();
        let other = directory.clone();

        directory.add(contact1()).unwrap();
        assert!(other.contains("ID1"));
        assert_eq!(other.len(), 1);

        other.delete("ID1").unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_get_returns_copy() {
        let directory = SharedContactDirectory::new();
        directory.add(contact1()).unwrap();

        let mut copy = directory.get("ID1").unwrap();
        copy.set_first_name("Mallory").unwrap();

        assert_eq!(
            directory.with_contact("ID1", |c| c.first_name().to_string()),
            Some("Alice".to_string())
        );
    }

    #[test]
    fn test_with_contact_missing() {
        let directory = SharedContactDirectory::new();
        assert_eq!(directory.with_contact("ID1", |c| c.id().len()), None);
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let directory = SharedContactDirectory::new();
        directory.add(contact1()).unwrap();

        assert_eq!(
            directory.update("ID1", "Alicia", "Jones", "123456789A", "1 NewAddress Way"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(directory.get("ID1"), Some(contact1()));
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let directory = SharedContactDirectory::new();
        directory.add(contact1()).unwrap();

        let poisoner = directory.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(directory.get("ID1"), Some(contact1()));
        directory.delete("ID1").unwrap();
        assert!(directory.is_empty());
    }
}
