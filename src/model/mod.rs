//! In-memory model: the patient book plus the active list filter.
//!
//! Commands execute against a [`Model`]: they resolve user-typed indices
//! against the *filtered* view, mutate the underlying [`PatientBook`], and
//! adjust the filter. Filters are plain data rather than boxed closures so
//! the model stays value-comparable and easy to assert on in tests.

pub mod book;
pub mod patient;

pub use book::{DuplicatePatientError, PatientBook};
pub use patient::Patient;

use crate::domain::Index;

/// The predicate selecting which patients the list view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every patient.
    #[default]
    All,

    /// Show patients whose name contains any of the keywords as a full word,
    /// case-insensitively.
    NameMatchesKeywords(Vec<String>),
}

impl Filter {
    /// Whether `patient` passes this filter.
    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            Self::All => true,
            Self::NameMatchesKeywords(keywords) => {
                let name = patient.name.as_str();
                keywords.iter().any(|keyword| {
                    name.split_whitespace()
                        .any(|word| word.eq_ignore_ascii_case(keyword))
                })
            }
        }
    }
}

/// The in-memory model commands execute against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    book: PatientBook,
    filter: Filter,
}

impl Model {
    /// Create a model showing every patient in `book`.
    pub fn new(book: PatientBook) -> Self {
        Self {
            book,
            filter: Filter::All,
        }
    }

    /// The underlying book.
    pub fn book(&self) -> &PatientBook {
        &self.book
    }

    /// Replace the whole book (used by clear).
    pub fn set_book(&mut self, book: PatientBook) {
        self.book = book;
    }

    /// The active filter.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The patients visible under the active filter, in book order.
    pub fn filtered_patients(&self) -> Vec<&Patient> {
        self.book
            .patients()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Number of patients visible under the active filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered_patients().len()
    }

    /// The patient at a user-typed index into the filtered view.
    pub fn filtered_patient(&self, index: Index) -> Option<&Patient> {
        self.filtered_patients().get(index.zero_based()).copied()
    }

    /// Whether an equal patient already exists.
    pub fn has_patient(&self, patient: &Patient) -> bool {
        self.book.contains(patient)
    }

    /// Append a patient. The caller has verified uniqueness.
    pub fn add_patient(&mut self, patient: Patient) {
        self.book.add(patient);
    }

    /// Remove the patient equal to `target`. Returns whether one was removed.
    pub fn remove_patient(&mut self, target: &Patient) -> bool {
        self.book.remove(target)
    }

    /// Replace `target` with `edited` in place. Returns whether it happened.
    pub fn replace_patient(&mut self, target: &Patient, edited: Patient) -> bool {
        self.book.replace(target, edited)
    }
}
