//! Error types for the contact directory.
//!
//! Directory and contact failures are all [`ValidationError`]s, defined with
//! the domain types. This module adds the errors of the surrounding
//! configuration layer.

use thiserror::Error;

pub use crate::domain::{ValidationError, ValidationResult};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACT_DIRECTORY_CAPACITY".to_string(),
            reason: "Must be a positive number, got: lots".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_DIRECTORY_CAPACITY: Must be a positive number, got: lots"
        );
    }
}
