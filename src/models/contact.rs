//! Contact model: one validated record in the directory.

use crate::domain::{
    Address, ContactId, NameField, PersonName, PhoneNumber, ValidationResult,
};
use crate::models::ContactDraft;
use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// A `Contact` only exists in a valid state. [`Contact::new`] validates every
/// field and produces nothing on failure; each setter re-validates the one
/// field it replaces and leaves the rest untouched. The ID has no setter.
///
/// Deserializing goes through [`ContactDraft`], so a missing or `null` field
/// is rejected with the same error its setter would give for a bad value.
///
/// # Example
///
/// ```
/// use contact_directory::Contact;
///
/// let mut contact = Contact::new("ID1", "Alice", "Smith", "1112223333", "1 Apple Rd").unwrap();
/// contact.set_first_name("Alicia").unwrap();
/// assert_eq!(contact.first_name(), "Alicia");
/// assert!(contact.set_phone("111-222-3333").is_err());
/// assert_eq!(contact.phone(), "1112223333");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    address: Address,
}

impl Contact {
    /// Create a fully validated contact.
    ///
    /// Fields are checked in order: ID, first name, last name, phone,
    /// address. The first failure is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is longer than 10 characters
    /// - `InvalidName` if either name is longer than 10 characters
    /// - `InvalidPhone` unless `phone` is exactly 10 ASCII digits
    /// - `InvalidAddress` if `address` is longer than 30 characters
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id: ContactId::new(id)?,
            first_name: PersonName::new(NameField::First, first_name)?,
            last_name: PersonName::new(NameField::Last, last_name)?,
            phone: PhoneNumber::new(phone)?,
            address: Address::new(address)?,
        })
    }

    /// Assemble a contact from fields that were each validated already.
    pub(crate) fn from_parts(
        id: ContactId,
        first_name: PersonName,
        last_name: PersonName,
        phone: PhoneNumber,
        address: Address,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            phone,
            address,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The typed identifier, as used for directory keys.
    pub fn contact_id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Replace the first name (at most 10 characters).
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> ValidationResult<()> {
        self.first_name = PersonName::new(NameField::First, first_name)?;
        Ok(())
    }

    /// Replace the last name (at most 10 characters).
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> ValidationResult<()> {
        self.last_name = PersonName::new(NameField::Last, last_name)?;
        Ok(())
    }

    /// Replace the phone number (exactly 10 ASCII digits).
    pub fn set_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address (at most 30 characters).
    pub fn set_address(&mut self, address: impl Into<String>) -> ValidationResult<()> {
        self.address = Address::new(address)?;
        Ok(())
    }

    /// Move the mutable fields of an already-validated trial copy onto this
    /// contact, in first name, last name, phone, address order.
    ///
    /// The trial must have been cloned from `self`; the ID is left alone.
    pub(crate) fn commit(&mut self, trial: Contact) {
        debug_assert_eq!(self.id, trial.id);
        let Contact {
            first_name,
            last_name,
            phone,
            address,
            ..
        } = trial;
        self.first_name = first_name;
        self.last_name = last_name;
        self.phone = phone;
        self.address = address;
    }
}
