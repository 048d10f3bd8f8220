//! Patient record.

use crate::domain::{Address, Email, LastVisit, Medicine, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A patient record.
///
/// Immutable value object: edits never mutate a stored patient in place,
/// they build a replacement and swap it wholesale. Every field is a
/// validated domain value, so a `Patient` that exists is a valid one —
/// including one deserialized from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// Full name
    pub name: Name,

    /// Contact phone number
    pub phone: Phone,

    /// Contact email address
    pub email: Email,

    /// Home address
    pub address: Address,

    /// Date of the most recent visit
    pub last_visit: LastVisit,

    /// Tags attached to the patient
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,

    /// Medicines currently prescribed
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub medicines: BTreeSet<Medicine>,
}

impl Patient {
    /// Create a new patient record.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        last_visit: LastVisit,
        tags: BTreeSet<Tag>,
        medicines: BTreeSet<Medicine>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            last_visit,
            tags,
            medicines,
        }
    }

    /// Build a replacement record with a different medicine set.
    ///
    /// Used by prescribe/unprescribe, which never touch the other fields.
    pub fn with_medicines(&self, medicines: BTreeSet<Medicine>) -> Self {
        Self {
            medicines,
            ..self.clone()
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Last visit: {}",
            self.name, self.phone, self.email, self.address, self.last_visit
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        if !self.medicines.is_empty() {
            let names: Vec<&str> = self.medicines.iter().map(|m| m.as_str()).collect();
            write!(f, "; Medicines: {}", names.join(", "))?;
        }
        Ok(())
    }
}
