//! Filter the list by name keywords.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::model::{Filter, Model};

/// Shows only patients whose name contains any keyword as a full word,
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const USAGE: &'static str = "find: Shows patients whose names contain any of \
        the given keywords (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice benson";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.set_filter(Filter::NameMatchesKeywords(self.keywords.clone()));
        Ok(CommandOutcome::new(format!(
            "{} patients listed!",
            model.filtered_len()
        )))
    }
}
