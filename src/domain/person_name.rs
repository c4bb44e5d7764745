//! PersonName value object.

use super::errors::{NameField, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// A first or last name of at most [`PersonName::MAX_LEN`] characters.
///
/// The same rule covers both name fields; the [`NameField`] passed to
/// [`PersonName::new`] only decides which field the error reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Longest accepted name, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new PersonName for the given field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName(field)` if the name is longer
    /// than [`PersonName::MAX_LEN`] characters.
    pub fn new(field: NameField, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::InvalidName(field));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// No `Deserialize`: a bare string does not say whether it is a first or a
// last name, so there is no `NameField` to report on failure. Names are
// deserialized through `ContactDraft`, which knows the field.
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
