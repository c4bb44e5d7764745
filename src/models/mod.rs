//! Contact record types.
//!
//! [`Contact`] is the validated entity stored by the directory;
//! [`ContactDraft`] is its nullable, serde-facing counterpart.

pub mod contact;
pub mod draft;

pub use contact::Contact;
pub use draft::ContactDraft;
