//! Delete a patient by displayed index.

use super::CommandOutcome;
use crate::domain::Index;
use crate::error::{CommandError, CommandResult};
use crate::model::Model;

/// Removes the patient at an index into the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const USAGE: &'static str = "delete: Deletes the patient at the given index \
        in the displayed list.\n\
        Parameters: INDEX (a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = model
            .filtered_patient(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex)?;

        model.remove_patient(&target);
        Ok(CommandOutcome::new(format!("Deleted patient: {}", target)))
    }
}
