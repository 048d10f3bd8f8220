//! Edit the patient at a displayed index.

use super::CommandOutcome;
use crate::domain::{Address, Email, Index, LastVisit, Name, Phone, Tag};
use crate::error::{CommandError, CommandResult};
use crate::model::{Filter, Model, Patient};
use std::collections::BTreeSet;

/// The fields an edit replaces. Unset fields keep the patient's values.
///
/// Medicines are deliberately absent: prescriptions change only through the
/// prescribe and unprescribe commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub last_visit: Option<LastVisit>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPatientDescriptor {
    /// Whether the descriptor replaces at least one field.
    pub fn is_any_field_set(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.last_visit.is_some()
            || self.tags.is_some()
    }

    /// Build the replacement record for `target`.
    fn apply_to(&self, target: &Patient) -> Patient {
        Patient::new(
            self.name.clone().unwrap_or_else(|| target.name.clone()),
            self.phone.clone().unwrap_or_else(|| target.phone.clone()),
            self.email.clone().unwrap_or_else(|| target.email.clone()),
            self.address.clone().unwrap_or_else(|| target.address.clone()),
            self.last_visit.unwrap_or(target.last_visit),
            self.tags.clone().unwrap_or_else(|| target.tags.clone()),
            target.medicines.clone(),
        )
    }
}

/// Replaces the patient at an index with an edited copy, wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPatientDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const USAGE: &'static str = "edit: Edits the patient at the given index in the \
        displayed list. Existing values are overwritten; unnamed fields are kept.\n\
        Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [v/LAST_VISIT] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided";

    pub fn new(index: Index, descriptor: EditPatientDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = model
            .filtered_patient(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex)?;

        let edited = self.descriptor.apply_to(&target);

        // Editing a patient into a copy of a *different* record is a duplicate;
        // a no-op edit is allowed.
        if edited != target && model.has_patient(&edited) {
            return Err(CommandError::DuplicatePatient);
        }

        model.replace_patient(&target, edited.clone());
        model.set_filter(Filter::All);
        Ok(CommandOutcome::new(format!("Edited patient: {}", edited)))
    }
}
