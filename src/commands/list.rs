//! List all patients.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::model::{Filter, Model};

/// Resets the active filter so the list view shows every patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub const MESSAGE_SUCCESS: &'static str = "Listed all patients";

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.set_filter(Filter::All);
        Ok(CommandOutcome::new(Self::MESSAGE_SUCCESS))
    }
}
