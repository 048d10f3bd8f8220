//! Exit the application.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// Produces an exiting outcome; the shell terminates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub const MESSAGE_EXIT: &'static str = "Exiting patient book as requested ...";

    pub fn execute(&self, _model: &mut Model) -> CommandResult<CommandOutcome> {
        Ok(CommandOutcome::exiting(Self::MESSAGE_EXIT))
    }
}
