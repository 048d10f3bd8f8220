//! patientbook - A local patient-record manager driven by a command-line syntax.
//!
//! Patients (name, phone, email, address, last-visit date, tags, prescribed
//! medicines) live in an in-memory book and are manipulated through discrete
//! commands parsed from text input, with the book persisted to a flat JSON
//! file after every change.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for every patient field
//! - **model**: the patient record, the unique ordered book, and the
//!   filtered view commands execute against
//! - **parser**: tokenizer, shared conversions and per-command parsers
//! - **commands**: one value per user intent, executed against the model
//! - **error**: custom error types for precise error handling
//! - **storage**: flat JSON persistence of the book
//! - **config**: configuration management from environment variables
//! - **engine**: the parse-execute-persist pipeline behind the shell

pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;

pub use commands::{CommandKind, CommandOutcome};
pub use config::Config;
pub use engine::Engine;
pub use error::{CommandError, ConfigError, EngineError, ParseError, StorageError};
pub use model::{Filter, Model, Patient, PatientBook};
pub use parser::parse_command;
pub use storage::JsonBookStorage;
