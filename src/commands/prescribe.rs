//! Prescribe medicines to a patient.

use super::CommandOutcome;
use crate::domain::{Index, Medicine};
use crate::error::{CommandError, CommandResult};
use crate::model::{Filter, Model};
use std::collections::BTreeSet;

/// Adds medicines to the patient at a displayed index.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescribeCommand {
    pub index: Index,
    pub medicines: BTreeSet<Medicine>,
}

impl PrescribeCommand {
    pub const COMMAND_WORD: &'static str = "prescribe";

    pub const USAGE: &'static str = "prescribe: Prescribes the given medicines to the \
        patient at the given index in the displayed list.\n\
        Parameters: INDEX m/MEDICINE [m/MEDICINE]...\n\
        Example: prescribe 1 m/paracetamol m/ibuprofen";

    pub fn new(index: Index, medicines: BTreeSet<Medicine>) -> Self {
        Self { index, medicines }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = model
            .filtered_patient(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex)?;

        let already: Vec<&str> = self
            .medicines
            .iter()
            .filter(|m| target.medicines.contains(*m))
            .map(|m| m.as_str())
            .collect();
        if !already.is_empty() {
            return Err(CommandError::AlreadyPrescribed(already.join(", ")));
        }

        let mut medicines = target.medicines.clone();
        medicines.extend(self.medicines.iter().cloned());
        let edited = target.with_medicines(medicines);

        let added: Vec<&str> = self.medicines.iter().map(|m| m.as_str()).collect();
        let message = format!("Prescribed to {}: {}", edited.name, added.join(", "));

        model.replace_patient(&target, edited);
        model.set_filter(Filter::All);
        Ok(CommandOutcome::new(message))
    }
}
