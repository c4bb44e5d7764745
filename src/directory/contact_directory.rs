//! In-memory, identifier-keyed contact store.

use crate::domain::{ContactId, ValidationError, ValidationResult};
use crate::models::{Contact, ContactDraft};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// An in-memory collection of contacts keyed by ID.
///
/// The directory owns every contact it stores. Callers read through
/// [`ContactDirectory::get`] and change stored contacts only through
/// [`ContactDirectory::update`]; there is no mutable accessor.
///
/// Every operation that returns an error leaves the directory unchanged.
///
/// # Example
///
/// ```
/// use contact_directory::{Contact, ContactDirectory};
///
/// let mut directory = ContactDirectory::new();
/// directory
///     .add(Contact::new("ID1", "Alice", "Smith", "1112223333", "1 Apple Rd").unwrap())
///     .unwrap();
///
/// // The first name is too long, so nothing is applied.
/// assert!(directory
///     .update("ID1", "AliciaVeronica", "Jones", "1231231234", "1 NewAddress Way")
///     .is_err());
/// assert_eq!(directory.get("ID1").unwrap().last_name(), "Smith");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: HashMap<ContactId, Contact>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
        }
    }

    /// Store a new contact under its ID.
    ///
    /// Accepts either a `Contact` or an `Option<Contact>`.
    ///
    /// # Errors
    ///
    /// - `NullEntity` if `None` is passed
    /// - `DuplicateId` if a contact with the same ID is already stored; the
    ///   stored contact is kept as it was
    pub fn add(&mut self, contact: impl Into<Option<Contact>>) -> ValidationResult<()> {
        let contact = contact.into().ok_or(ValidationError::NullEntity)?;

        match self.contacts.entry(contact.contact_id().clone()) {
            Entry::Occupied(entry) => {
                warn!(id = %entry.key(), "Rejected contact with duplicate ID");
                Err(ValidationError::DuplicateId(entry.key().to_string()))
            }
            Entry::Vacant(entry) => {
                debug!(id = %entry.key(), "Added contact");
                entry.insert(contact);
                Ok(())
            }
        }
    }

    /// Remove the contact stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has that ID.
    pub fn delete(&mut self, id: &str) -> ValidationResult<()> {
        match self.contacts.remove(id) {
            Some(_) => {
                debug!(id, "Deleted contact");
                Ok(())
            }
            None => Err(ValidationError::NotFound(id.to_string())),
        }
    }

    /// Replace all four mutable fields of a stored contact, or none of them.
    ///
    /// The new values are first applied to a disposable clone of the stored
    /// contact in first name, last name, phone, address order. Only when all
    /// four pass are they moved onto the stored contact. The stored ID never
    /// changes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has that ID
    /// - the first field error raised by the trial copy; the stored contact
    ///   is left exactly as it was
    pub fn update(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ValidationResult<()> {
        self.update_with(id, |trial| {
            trial.set_first_name(first_name)?;
            trial.set_last_name(last_name)?;
            trial.set_phone(phone)?;
            trial.set_address(address)
        })
    }

    /// Apply a draft's four mutable fields with the same all-or-nothing
    /// protocol as [`ContactDirectory::update`].
    ///
    /// The draft's own `id` is ignored. A missing field fails with that
    /// field's error at its place in the first name, last name, phone,
    /// address order.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has that ID, whatever the draft holds
    /// - the first field error, absent or invalid, in field order
    pub fn update_from_draft(&mut self, id: &str, draft: ContactDraft) -> ValidationResult<()> {
        self.update_with(id, |trial| draft.apply_to(trial))
    }

    /// Look up a contact by ID.
    ///
    /// Absence is a normal outcome here and is reported as `None`.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over stored contacts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Run `apply` on a clone of the stored contact and commit the clone
    /// only if it succeeds.
    fn update_with(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Contact) -> ValidationResult<()>,
    ) -> ValidationResult<()> {
        let stored = self
            .contacts
            .get_mut(id)
            .ok_or_else(|| ValidationError::NotFound(id.to_string()))?;

        let mut trial = stored.clone();
        if let Err(e) = apply(&mut trial) {
            warn!(id, error = %e, "Rejected contact update");
            return Err(e);
        }

        stored.commit(trial);
        debug!(id, "Updated contact");
        Ok(())
    }
}
