//! Nullable contact representation for serialized input.

use crate::domain::{
    Address, ContactId, NameField, PersonName, PhoneNumber, ValidationError, ValidationResult,
};
use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// A contact as it arrives from outside the type system.
///
/// Every field may be missing or `null`. Converting to a [`Contact`] turns an
/// absent field into the same error its validation rule reports, checked in
/// constructor order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactDraft {
    /// Set the four mutable fields of `contact` from this draft, in first
    /// name, last name, phone, address order.
    ///
    /// Each field is checked for presence and then validated before the next
    /// one is looked at, so the first bad field wins whether it is absent or
    /// invalid. On error `contact` may be partly changed; callers apply
    /// drafts to a disposable copy.
    pub fn apply_to(self, contact: &mut Contact) -> ValidationResult<()> {
        contact.set_first_name(
            self.first_name
                .ok_or(ValidationError::InvalidName(NameField::First))?,
        )?;
        contact.set_last_name(
            self.last_name
                .ok_or(ValidationError::InvalidName(NameField::Last))?,
        )?;
        contact.set_phone(self.phone.ok_or(ValidationError::InvalidPhone)?)?;
        contact.set_address(self.address.ok_or(ValidationError::InvalidAddress)?)
    }
}

impl TryFrom<ContactDraft> for Contact {
    type Error = ValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let id = ContactId::new(draft.id.ok_or(ValidationError::InvalidId)?)?;
        let first_name = PersonName::new(
            NameField::First,
            draft
                .first_name
                .ok_or(ValidationError::InvalidName(NameField::First))?,
        )?;
        let last_name = PersonName::new(
            NameField::Last,
            draft
                .last_name
                .ok_or(ValidationError::InvalidName(NameField::Last))?,
        )?;
        let phone = PhoneNumber::new(draft.phone.ok_or(ValidationError::InvalidPhone)?)?;
        let address = Address::new(draft.address.ok_or(ValidationError::InvalidAddress)?)?;

        Ok(Contact::from_parts(id, first_name, last_name, phone, address))
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id().to_string()),
            first_name: Some(contact.first_name().to_string()),
            last_name: Some(contact.last_name().to_string()),
            phone: Some(contact.phone().to_string()),
            address: Some(contact.address().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ContactDraft {
        ContactDraft {
            id: Some("12345".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            phone: Some("1234567890".to_string()),
            address: Some("123 Main St".to_string()),
        }
    }

    #[test]
    fn test_full_draft_converts() {
        let contact = Contact::try_from(full_draft()).unwrap();
        assert_eq!(contact.id(), "12345");
        assert_eq!(ContactDraft::from(&contact), full_draft());
    }

    #[test]
    fn test_null_fields_map_to_field_errors() {
        let cases = [
            (ContactDraft { id: None, ..full_draft() }, ValidationError::InvalidId),
            (
                ContactDraft { first_name: None, ..full_draft() },
                ValidationError::InvalidName(NameField::First),
            ),
            (
                ContactDraft { last_name: None, ..full_draft() },
                ValidationError::InvalidName(NameField::Last),
            ),
            (ContactDraft { phone: None, ..full_draft() }, ValidationError::InvalidPhone),
            (
                ContactDraft { address: None, ..full_draft() },
                ValidationError::InvalidAddress,
            ),
        ];

        for (draft, expected) in cases {
            assert_eq!(Contact::try_from(draft), Err(expected));
        }
    }

    #[test]
    fn test_invalid_id_reported_before_missing_name() {
        let draft = ContactDraft {
            id: Some("12345678901".to_string()),
            first_name: None,
            ..full_draft()
        };
        assert_eq!(Contact::try_from(draft), Err(ValidationError::InvalidId));
    }

    #[test]
    fn test_invalid_earlier_field_wins_over_null_later_field() {
        let draft = ContactDraft {
            first_name: Some("AliciaVeronica".to_string()),
            phone: None,
            ..full_draft()
        };
        assert_eq!(
            Contact::try_from(draft),
            Err(ValidationError::InvalidName(NameField::First))
        );

        let draft = ContactDraft {
            phone: Some("123-456-789".to_string()),
            address: None,
            ..full_draft()
        };
        assert_eq!(Contact::try_from(draft), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_null_earlier_field_wins_over_invalid_later_field() {
        let draft = ContactDraft {
            last_name: None,
            address: Some("x".repeat(31)),
            ..full_draft()
        };
        assert_eq!(
            Contact::try_from(draft),
            Err(ValidationError::InvalidName(NameField::Last))
        );
    }

    #[test]
    fn test_apply_to_checks_fields_in_order() {
        let mut contact = Contact::try_from(full_draft()).unwrap();
        let draft = ContactDraft {
            id: None,
            first_name: Some("Jane".to_string()),
            last_name: Some("DoeSmithson".to_string()),
            phone: None,
            address: None,
        };
        assert_eq!(
            draft.apply_to(&mut contact),
            Err(ValidationError::InvalidName(NameField::Last))
        );
    }

    #[test]
    fn test_draft_deserializes_missing_and_null() {
        let draft: ContactDraft =
            serde_json::from_str(r#"{"id":"ID1","first_name":null}"#).unwrap();
        assert_eq!(draft.id.as_deref(), Some("ID1"));
        assert!(draft.first_name.is_none());
        assert!(draft.address.is_none());
    }
}
