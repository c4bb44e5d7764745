//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// Validated at construction time: at most [`ContactId::MAX_LEN`]
/// characters. The empty string is a valid ID. There is no way to change the
/// value afterwards.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("ID1").unwrap();
/// assert_eq!(id.as_str(), "ID1");
/// assert!(ContactId::new("12345678901").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Longest accepted ID, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new ContactId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the ID is longer than
    /// [`ContactId::MAX_LEN`] characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets the directory map be queried with a plain `&str`.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("12345").unwrap();
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn test_contact_id_max_length() {
        assert!(ContactId::new("1234567890").is_ok());
        assert_eq!(
            ContactId::new("12345678901"),
            Err(ValidationError::InvalidId)
        );
    }

    #[test]
    fn test_contact_id_allows_empty() {
        assert_eq!(ContactId::new("").unwrap().as_str(), "");
    }

    #[test]
    fn test_contact_id_counts_chars_not_bytes() {
        // Ten characters, twenty bytes.
        assert!(ContactId::new("éééééééééé").is_ok());
    }

    #[test]
    fn test_contact_id_display() {
        let id = ContactId::new("ID1").unwrap();
        assert_eq!(format!("{}", id), "ID1");
    }

    #[test]
    fn test_contact_id_serialization() {
        let id = ContactId::new("ID1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ID1\"");
    }

    #[test]
    fn test_contact_id_deserialization_too_long_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"12345678901\"");
        assert!(result.is_err());
    }
}
