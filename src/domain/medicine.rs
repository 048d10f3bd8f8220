//! Medicine value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a prescribed medicine's name.
///
/// Medicine names are validated at construction time: non-empty,
/// alphanumeric characters only, no spaces.
///
/// # Example
///
/// ```
/// use patientbook::domain::Medicine;
///
/// let med = Medicine::new("paracetamol").unwrap();
/// assert_eq!(med.as_str(), "paracetamol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Medicine(String);

impl Medicine {
    /// Create a new Medicine, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidMedicine` if the name is empty or
    /// contains non-alphanumeric characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidMedicine(name));
        }

        Ok(Self(name))
    }

    /// Validate medicine name format.
    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Get the medicine name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Medicine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Medicine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Medicine::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Medicine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
