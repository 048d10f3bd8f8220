//! LastVisit value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a patient's last-visit date.
///
/// The wrapped date is always a real calendar date no later than today;
/// a visit cannot be recorded before it has happened.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use patientbook::domain::LastVisit;
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let visit = LastVisit::new(date).unwrap();
/// assert_eq!(visit.to_string(), "2020-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LastVisit(NaiveDate);

impl LastVisit {
    /// Create a new LastVisit, rejecting dates after today.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FutureDate` if the date lies in the future.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_on(date, Local::now().date_naive())
    }

    /// Create a new LastVisit validated against an explicit "today".
    ///
    /// Exists so the future-date rule can be exercised deterministically.
    pub fn new_on(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if !Self::is_valid(date, today) {
            return Err(ValidationError::FutureDate(date.to_string()));
        }
        Ok(Self(date))
    }

    /// Returns whether `date` is an acceptable last-visit date as of `today`.
    pub fn is_valid(date: NaiveDate, today: NaiveDate) -> bool {
        date <= today
    }

    /// Get the wrapped date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as an ISO-8601 date string
impl Serialize for LastVisit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from an ISO-8601 date string with validation
impl<'de> Deserialize<'de> for LastVisit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| serde::de::Error::custom(ValidationError::InvalidDate(s.clone())))?;
        LastVisit::new(date).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LastVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
