//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// Which of the two name fields a rejected value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first name"),
            Self::Last => write!(f, "last name"),
        }
    }
}

/// The single failure channel of the contact directory.
///
/// Every variant describes a caller input problem. An operation that returns
/// one of these has left all observable state exactly as it found it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact ID is missing or longer than 10 characters.
    #[error("Invalid contact ID")]
    InvalidId,

    /// First or last name is missing or longer than 10 characters.
    #[error("Invalid {0}")]
    InvalidName(NameField),

    /// Phone is missing or not exactly 10 ASCII digits.
    #[error("Invalid phone number")]
    InvalidPhone,

    /// Address is missing or longer than 30 characters.
    #[error("Invalid address")]
    InvalidAddress,

    /// No contact was supplied to add.
    #[error("Contact cannot be null")]
    NullEntity,

    /// A contact with this ID is already stored.
    #[error("Contact ID already exists: {0}")]
    DuplicateId(String),

    /// No contact is stored under this ID.
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
