//! Contact Directory - an in-memory store of validated contact records.
//!
//! Contacts are created fully valid or not at all, and every field change is
//! re-validated. The directory keys contacts by ID and applies multi-field
//! updates all-or-nothing: a rejected update leaves the stored contact
//! untouched.
//!
//! # Architecture
//!
//! - **domain**: validated value objects and the `ValidationError` taxonomy
//! - **models**: the `Contact` entity and its nullable `ContactDraft` form
//! - **directory**: `ContactDirectory` and its thread-safe handle
//! - **error**: configuration errors and re-exported validation errors
//! - **config**: configuration from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::{ContactDirectory, SharedContactDirectory};
pub use domain::{NameField, ValidationError, ValidationResult};
pub use error::ConfigError;
pub use models::{Contact, ContactDraft};
