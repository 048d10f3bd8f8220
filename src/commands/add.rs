//! Add a patient to the book.

use super::CommandOutcome;
use crate::error::{CommandError, CommandResult};
use crate::model::{Model, Patient};

/// Adds a patient; rejects one equal to an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub patient: Patient,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const USAGE: &'static str = "add: Adds a patient to the patient book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS v/LAST_VISIT [t/TAG]... [m/MEDICINE]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com \
        a/311, Clementi Ave 2, #02-25 v/2020-01-01 t/friends m/paracetamol";

    pub fn new(patient: Patient) -> Self {
        Self { patient }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        if model.has_patient(&self.patient) {
            return Err(CommandError::DuplicatePatient);
        }

        model.add_patient(self.patient.clone());
        Ok(CommandOutcome::new(format!(
            "New patient added: {}",
            self.patient
        )))
    }
}
