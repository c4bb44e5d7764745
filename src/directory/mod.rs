//! The contact directory.
//!
//! [`ContactDirectory`] is the single-threaded, identifier-keyed store and
//! owns the all-or-nothing update protocol. [`SharedContactDirectory`] wraps
//! it behind one lock for callers that share it across threads.

pub mod contact_directory;
pub mod shared;

pub use contact_directory::ContactDirectory;
pub use shared::SharedContactDirectory;
