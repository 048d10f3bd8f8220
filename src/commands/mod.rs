//! Command values: one struct per user intent.
//!
//! A parsed input line becomes a [`CommandKind`] holding the command value.
//! Commands are plain data with structural equality; executing one mutates
//! the [`Model`] and yields a [`CommandOutcome`] with the message to show.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod prescribe;
pub mod unprescribe;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPatientDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use prescribe::PrescribeCommand;
pub use unprescribe::{MedicineRemoval, UnprescribeCommand};

use crate::error::CommandResult;
use crate::model::Model;

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    message: String,
    exit: bool,
}

impl CommandOutcome {
    /// An outcome that only carries a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    /// An outcome that asks the shell to terminate.
    pub fn exiting(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: true,
        }
    }

    /// The message to show the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the shell should terminate.
    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// A parsed user intent, ready to execute against the model.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    Add(AddCommand),
    Clear(ClearCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Exit(ExitCommand),
    Find(FindCommand),
    Help(HelpCommand),
    List(ListCommand),
    Prescribe(PrescribeCommand),
    Unprescribe(UnprescribeCommand),
}

impl CommandKind {
    /// Execute the wrapped command against `model`.
    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        match self {
            Self::Add(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model),
            Self::Exit(cmd) => cmd.execute(model),
            Self::Find(cmd) => cmd.execute(model),
            Self::Help(cmd) => cmd.execute(model),
            Self::List(cmd) => cmd.execute(model),
            Self::Prescribe(cmd) => cmd.execute(model),
            Self::Unprescribe(cmd) => cmd.execute(model),
        }
    }

    /// Whether executing this command can change the book.
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Self::Exit(_) | Self::Find(_) | Self::Help(_) | Self::List(_)
        )
    }
}
