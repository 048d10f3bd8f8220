//! Error types for the patient book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Validation failures at the parsing layer all surface as the
//! single [`ParseError`] kind carrying a user-facing constraint message.

use crate::domain::ValidationError;
use crate::model::DuplicatePatientError;
use thiserror::Error;

/// A parse or validation failure, carrying the message shown to the user.
///
/// Every invalid input — malformed command, bad field value, duplicate
/// repeated input — collapses into this one kind; the shell just prints it
/// and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Create a ParseError with the given user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors that can occur while executing a command against the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The typed index does not address a patient in the displayed list
    #[error("The patient index provided is invalid")]
    InvalidIndex,

    /// An equal patient already exists in the book
    #[error("This patient already exists in the patient book")]
    DuplicatePatient,

    /// One or more medicines are already prescribed to the patient
    #[error("Already prescribed to this patient: {0}")]
    AlreadyPrescribed(String),

    /// One or more medicines are not currently prescribed to the patient
    #[error("Not currently prescribed to this patient: {0}")]
    NotPrescribed(String),

    /// An unprescribe-all was issued for a patient without prescriptions
    #[error("This patient has no prescribed medicines to remove")]
    NothingPrescribed,
}

/// Errors that can occur while loading or saving the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("Failed to access data file {path}: {reason}")]
    Io { path: String, reason: String },

    /// The data file is not valid JSON or holds invalid field values
    #[error("Data file could not be parsed: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file holds two equal patients
    #[error("{0}")]
    Duplicate(#[from] DuplicatePatientError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any failure an executed input line can produce, for the shell.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with EngineError
pub type EngineResult<T> = Result<T, EngineError>;
