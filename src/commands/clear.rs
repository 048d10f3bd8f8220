//! Clear the patient book.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::model::{Model, PatientBook};

/// Replaces the book with an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";

    pub const MESSAGE_SUCCESS: &'static str = "Patient book has been cleared!";

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.set_book(PatientBook::new());
        Ok(CommandOutcome::new(Self::MESSAGE_SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, LastVisit, Name, Phone};
    use crate::model::Patient;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    #[test]
    fn test_clear_empties_the_book() {
        let mut book = PatientBook::new();
        book.add(Patient::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("wall street").unwrap(),
            LastVisit::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap(),
            BTreeSet::new(),
            BTreeSet::new(),
        ));
        let mut model = Model::new(book);

        let outcome = ClearCommand.execute(&mut model).unwrap();
        assert!(model.book().is_empty());
        assert_eq!(outcome.message(), ClearCommand::MESSAGE_SUCCESS);
    }

    #[test]
    fn test_clear_on_empty_book_succeeds() {
        let mut model = Model::default();
        assert!(ClearCommand.execute(&mut model).is_ok());
    }
}
