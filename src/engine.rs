//! The parse-execute-persist pipeline behind the shell.

use crate::commands::CommandOutcome;
use crate::error::{EngineResult, StorageResult};
use crate::model::Model;
use crate::parser::parse_command;
use crate::storage::JsonBookStorage;
use tracing::{debug, info};

/// Owns the model and its storage; executes one input line at a time.
///
/// Execution is strictly sequential: a line is parsed, the command runs
/// against the model, and — when the command can change the book — the
/// result is written back to disk before the outcome is returned.
pub struct Engine {
    model: Model,
    storage: JsonBookStorage,
}

impl Engine {
    /// Create an engine over an already-loaded model.
    pub fn new(model: Model, storage: JsonBookStorage) -> Self {
        Self { model, storage }
    }

    /// Load the book from `storage` and build an engine on it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data file exists but cannot be loaded.
    pub fn load(storage: JsonBookStorage) -> StorageResult<Self> {
        let book = storage.load()?;
        Ok(Self {
            model: Model::new(book),
            storage,
        })
    }

    /// The current model, for rendering the filtered list.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Parse and execute one input line.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` on a parse failure, a command failure, or a
    /// failure to persist the mutated book.
    pub fn execute(&mut self, input: &str) -> EngineResult<CommandOutcome> {
        debug!("Parsing input: {}", input);
        let command = parse_command(input)?;

        let outcome = command.execute(&mut self.model)?;
        if command.mutates() {
            self.storage.save(self.model.book())?;
        }

        info!("Executed command: {}", outcome.message());
        Ok(outcome)
    }
}
