//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use patientbook::domain::{Address, Email, LastVisit, Medicine, Name, Phone, Tag};
use patientbook::{Engine, JsonBookStorage, Patient, PatientBook};
use std::collections::BTreeSet;
use tempfile::TempDir;

/// Create a sample patient with the given name, phone and email.
pub fn sample_patient(name: &str, phone: &str, email: &str) -> Patient {
    Patient::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        LastVisit::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap(),
        BTreeSet::new(),
        BTreeSet::new(),
    )
}

/// Create a sample patient carrying tags and medicines.
#[allow(dead_code)]
pub fn sample_patient_with_meds(name: &str, tags: &[&str], meds: &[&str]) -> Patient {
    let mut patient = sample_patient(name, "94351253", "someone@example.com");
    patient.tags = tags.iter().map(|t| Tag::new(*t).unwrap()).collect();
    patient.medicines = meds.iter().map(|m| Medicine::new(*m).unwrap()).collect();
    patient
}

/// A book holding the usual test patients.
pub fn typical_book() -> PatientBook {
    let mut book = PatientBook::new();
    book.add(sample_patient("Alice Pauline", "94351253", "alice@example.com"));
    book.add(sample_patient("Benson Meier", "98765432", "johnd@example.com"));
    book.add(sample_patient("Carl Kurz", "95352563", "heinz@example.com"));
    book.add(sample_patient("Daniel Meier", "87652533", "cornelia@example.com"));
    book
}

/// An engine over a fresh temp-directory data file pre-seeded with
/// `typical_book()`.
pub fn typical_engine(dir: &TempDir) -> Engine {
    let storage = JsonBookStorage::new(dir.path().join("patients.json"));
    storage.save(&typical_book()).unwrap();
    Engine::load(storage).unwrap()
}
