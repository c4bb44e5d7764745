//! Domain value objects and types.
//!
//! Each field rule of a contact lives in exactly one constructor here.
//! `Contact::new` and every `Contact` setter go through these types, so the
//! construction path and the mutation path cannot disagree about what is
//! valid.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use address::Address;
pub use contact_id::ContactId;
pub use errors::{NameField, ValidationError, ValidationResult};
pub use person_name::PersonName;
pub use phone::PhoneNumber;
