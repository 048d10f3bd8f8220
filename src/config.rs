//! Configuration management.
//!
//! Loads configuration from environment variables, with a `.env` file picked
//! up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data/patientbook.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration for the patient book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: "data/patientbook.json")
    pub data_file: PathBuf,

    /// Log level filter when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PATIENTBOOK_DATA_FILE`: path of the JSON data file
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if present, without failing when absent
        let _ = dotenvy::dotenv();

        let data_file = match env::var("PATIENTBOOK_DATA_FILE") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "PATIENTBOOK_DATA_FILE".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(value)
            }
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
