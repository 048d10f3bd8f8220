//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the patient record fields:
//! names, phone numbers, emails, addresses, last-visit dates, tags and
//! medicines, plus the one-based list index users type in commands. These
//! value objects validate at construction time so invalid data cannot be
//! represented in the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod index;
pub mod last_visit;
pub mod medicine;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use errors::ValidationError;
pub use index::Index;
pub use last_visit::LastVisit;
pub use medicine::Medicine;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
