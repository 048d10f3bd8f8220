//! Show the command summary.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// Prints a summary of every command and its syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";

    pub const MESSAGE_HELP: &'static str = "Available commands:\n\
        \x20 add n/NAME p/PHONE e/EMAIL a/ADDRESS v/LAST_VISIT [t/TAG]... [m/MEDICINE]...\n\
        \x20 edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [v/LAST_VISIT] [t/TAG]...\n\
        \x20 delete INDEX\n\
        \x20 find KEYWORD [MORE_KEYWORDS]...\n\
        \x20 prescribe INDEX m/MEDICINE [m/MEDICINE]...\n\
        \x20 unprescribe INDEX m/MEDICINE [m/MEDICINE]... (m/all removes every medicine)\n\
        \x20 list\n\
        \x20 clear\n\
        \x20 help\n\
        \x20 exit";

    pub fn execute(&self, _model: &mut Model) -> CommandResult<CommandOutcome> {
        Ok(CommandOutcome::new(Self::MESSAGE_HELP))
    }
}
