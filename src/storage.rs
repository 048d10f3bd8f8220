//! Flat JSON persistence of the patient book.
//!
//! The book is stored as a single JSON document. Field validation happens
//! during deserialization — the domain value objects reject invalid data —
//! so a book that loads is a valid one.

use crate::error::{StorageError, StorageResult};
use crate::model::{Patient, PatientBook};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk shape of the patient book.
#[derive(Serialize, Deserialize)]
struct BookData {
    patients: Vec<Patient>,
}

/// Loads and saves the patient book at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    path: PathBuf,
}

impl JsonBookStorage {
    /// Create storage backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book. An absent file loads as an empty book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, is not valid JSON,
    /// holds invalid field values, or contains duplicate patients.
    pub fn load(&self) -> StorageResult<PatientBook> {
        if !self.path.exists() {
            info!(
                "Data file {} not found, starting with an empty book",
                self.path.display()
            );
            return Ok(PatientBook::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data: BookData = serde_json::from_str(&raw)?;
        let book = PatientBook::from_patients(data.patients)?;

        debug!("Loaded {} patients from {}", book.len(), self.path.display());
        Ok(book)
    }

    /// Save the book, creating parent directories as needed.
    pub fn save(&self, book: &PatientBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let data = BookData {
            patients: book.patients().to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        debug!("Saved {} patients to {}", book.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, err: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, LastVisit, Medicine, Name, Phone, Tag};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn sample_patient(name: &str) -> Patient {
        Patient::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("wall street").unwrap(),
            LastVisit::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap(),
            BTreeSet::from([Tag::new("friends").unwrap()]),
            BTreeSet::from([Medicine::new("paracetamol").unwrap()]),
        )
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonBookStorage::new(dir.path().join("patients.json"));

        let mut book = PatientBook::new();
        book.add(sample_patient("Alice Pauline"));
        book.add(sample_patient("Benson Meier"));

        storage.save(&book).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_load_missing_file_yields_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonBookStorage::new(dir.path().join("absent.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonBookStorage::new(dir.path().join("nested/dir/patients.json"));
        storage.save(&PatientBook::new()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_load_rejects_invalid_field_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        fs::write(
            &path,
            r#"{"patients":[{"name":"Alice","phone":"abc","email":"a@b.com","address":"x","last_visit":"2020-01-01"}]}"#,
        )
        .unwrap();

        let result = JsonBookStorage::new(path).load();
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_patients() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonBookStorage::new(dir.path().join("patients.json"));

        let patient = sample_patient("Alice Pauline");
        let data = BookData {
            patients: vec![patient.clone(), patient],
        };
        fs::write(storage.path(), serde_json::to_string(&data).unwrap()).unwrap();

        let result = storage.load();
        assert!(matches!(result, Err(StorageError::Duplicate(_))));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        fs::write(&path, "not json at all").unwrap();

        let result = JsonBookStorage::new(path).load();
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
