//! Ordered collection of unique patients.

use super::patient::Patient;
use std::fmt;

/// Error produced when a patient list contains two equal records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePatientError {
    /// Name of the duplicated patient, for the error message.
    pub name: String,
}

impl fmt::Display for DuplicatePatientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient list contains a duplicate patient: {}", self.name)
    }
}

impl std::error::Error for DuplicatePatientError {}

/// An ordered collection of unique patients.
///
/// Uniqueness is by full field equality; insertion order is preserved.
/// Callers are expected to check `contains` before `add`/`replace` — the
/// commands do, so they can report the duplicate to the user instead of
/// silently dropping it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientBook {
    patients: Vec<Patient>,
}

impl PatientBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from a list of patients, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePatientError` naming the first patient that appears
    /// more than once.
    pub fn from_patients(patients: Vec<Patient>) -> Result<Self, DuplicatePatientError> {
        let mut book = Self::new();
        for patient in patients {
            if book.contains(&patient) {
                return Err(DuplicatePatientError {
                    name: patient.name.as_str().to_string(),
                });
            }
            book.patients.push(patient);
        }
        Ok(book)
    }

    /// Whether an equal patient is already in the book.
    pub fn contains(&self, patient: &Patient) -> bool {
        self.patients.contains(patient)
    }

    /// Append a patient. The caller has verified uniqueness.
    pub fn add(&mut self, patient: Patient) {
        debug_assert!(!self.contains(&patient));
        self.patients.push(patient);
    }

    /// Remove the patient equal to `target`. Returns whether one was removed.
    pub fn remove(&mut self, target: &Patient) -> bool {
        match self.patients.iter().position(|p| p == target) {
            Some(pos) => {
                self.patients.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the patient equal to `target` with `edited`, in place.
    /// Returns whether a replacement happened.
    pub fn replace(&mut self, target: &Patient, edited: Patient) -> bool {
        match self.patients.iter().position(|p| p == target) {
            Some(pos) => {
                self.patients[pos] = edited;
                true
            }
            None => false,
        }
    }

    /// All patients, in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Number of patients in the book.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Whether the book holds no patients.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
