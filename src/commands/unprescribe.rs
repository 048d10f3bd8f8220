//! Remove prescribed medicines from a patient.

use super::CommandOutcome;
use crate::domain::{Index, Medicine};
use crate::error::{CommandError, CommandResult};
use crate::model::{Filter, Model};
use std::collections::BTreeSet;

/// What an unprescribe removes: everything, or a named set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicineRemoval {
    /// Remove every prescribed medicine (`m/all`).
    All,

    /// Remove exactly these medicines.
    Medicines(BTreeSet<Medicine>),
}

/// Removes medicines from the patient at a displayed index.
#[derive(Debug, Clone, PartialEq)]
pub struct UnprescribeCommand {
    pub index: Index,
    pub removal: MedicineRemoval,
}

impl UnprescribeCommand {
    pub const COMMAND_WORD: &'static str = "unprescribe";

    pub const USAGE: &'static str = "unprescribe: Removes the given medicines from the \
        patient at the given index in the displayed list. Use m/all to remove every \
        prescribed medicine.\n\
        Parameters: INDEX m/MEDICINE [m/MEDICINE]...\n\
        Example: unprescribe 1 m/paracetamol";

    pub fn new(index: Index, removal: MedicineRemoval) -> Self {
        Self { index, removal }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = model
            .filtered_patient(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex)?;

        let (remaining, message) = match &self.removal {
            MedicineRemoval::All => {
                if target.medicines.is_empty() {
                    return Err(CommandError::NothingPrescribed);
                }
                let message =
                    format!("Removed all prescribed medicines for {}", target.name);
                (BTreeSet::new(), message)
            }
            MedicineRemoval::Medicines(medicines) => {
                let missing: Vec<&str> = medicines
                    .iter()
                    .filter(|m| !target.medicines.contains(*m))
                    .map(|m| m.as_str())
                    .collect();
                if !missing.is_empty() {
                    return Err(CommandError::NotPrescribed(missing.join(", ")));
                }

                let remaining: BTreeSet<Medicine> = target
                    .medicines
                    .difference(medicines)
                    .cloned()
                    .collect();
                let removed: Vec<&str> = medicines.iter().map(|m| m.as_str()).collect();
                let message =
                    format!("Unprescribed from {}: {}", target.name, removed.join(", "));
                (remaining, message)
            }
        };

        let edited = target.with_medicines(remaining);
        model.replace_patient(&target, edited);
        model.set_filter(Filter::All);
        Ok(CommandOutcome::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, LastVisit, Name, Phone};
    use crate::model::{Patient, PatientBook};
    use chrono::NaiveDate;

    fn patient_with_meds(name: &str, meds: &[&str]) -> Patient {
        Patient::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("wall street").unwrap(),
            LastVisit::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap(),
            BTreeSet::new(),
            meds.iter().map(|m| Medicine::new(*m).unwrap()).collect(),
        )
    }

    fn meds(names: &[&str]) -> BTreeSet<Medicine> {
        names.iter().map(|m| Medicine::new(*m).unwrap()).collect()
    }

    fn index(i: usize) -> Index {
        Index::from_one_based(i).unwrap()
    }

    fn model_with_one(meds_list: &[&str]) -> Model {
        let mut book = PatientBook::new();
        book.add(patient_with_meds("Alice Pauline", meds_list));
        Model::new(book)
    }

    #[test]
    fn test_unprescribe_removes_named_medicines() {
        let mut model = model_with_one(&["paracetamol", "ibuprofen"]);

        let cmd = UnprescribeCommand::new(
            index(1),
            MedicineRemoval::Medicines(meds(&["paracetamol"])),
        );
        let outcome = cmd.execute(&mut model).unwrap();

        assert_eq!(outcome.message(), "Unprescribed from Alice Pauline: paracetamol");
        assert_eq!(model.book().patients()[0].medicines, meds(&["ibuprofen"]));
    }

    #[test]
    fn test_unprescribe_rejects_medicine_not_prescribed() {
        let mut model = model_with_one(&["paracetamol"]);

        let cmd = UnprescribeCommand::new(
            index(1),
            MedicineRemoval::Medicines(meds(&["penicillin"])),
        );
        let err = cmd.execute(&mut model).unwrap_err();

        assert_eq!(err, CommandError::NotPrescribed("penicillin".to_string()));
        assert_eq!(model.book().patients()[0].medicines, meds(&["paracetamol"]));
    }

    #[test]
    fn test_unprescribe_all_clears_medicines() {
        let mut model = model_with_one(&["paracetamol", "ibuprofen"]);

        let cmd = UnprescribeCommand::new(index(1), MedicineRemoval::All);
        let outcome = cmd.execute(&mut model).unwrap();

        assert_eq!(
            outcome.message(),
            "Removed all prescribed medicines for Alice Pauline"
        );
        assert!(model.book().patients()[0].medicines.is_empty());
    }

    #[test]
    fn test_unprescribe_all_with_nothing_prescribed_fails() {
        let mut model = model_with_one(&[]);

        let cmd = UnprescribeCommand::new(index(1), MedicineRemoval::All);
        assert_eq!(
            cmd.execute(&mut model).unwrap_err(),
            CommandError::NothingPrescribed
        );
    }

    #[test]
    fn test_unprescribe_rejects_out_of_range_index() {
        let mut model = Model::default();
        let cmd = UnprescribeCommand::new(index(1), MedicineRemoval::All);
        assert_eq!(cmd.execute(&mut model).unwrap_err(), CommandError::InvalidIndex);
    }
}
