//! End-to-end tests for the command pipeline.
//!
//! Each test drives raw input lines through parse, execute and persist, then
//! asserts on the model, the outcome messages and the data file.

mod common;

use common::*;
use patientbook::{EngineError, Filter};

#[test]
fn test_patient_lifecycle_add_edit_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    // ADD
    let outcome = engine
        .execute("add n/Elle Meyer p/9482224 e/werner@example.com a/michegan ave v/2020-01-01")
        .unwrap();
    assert!(outcome.message().starts_with("New patient added: Elle Meyer"));
    assert_eq!(engine.model().book().len(), 5);

    // EDIT (the new patient is last)
    let outcome = engine.execute("edit 5 p/94824240").unwrap();
    assert!(outcome.message().contains("Phone: 94824240"));

    // DELETE
    let outcome = engine.execute("delete 5").unwrap();
    assert!(outcome.message().contains("Elle Meyer"));
    assert_eq!(engine.model().book().len(), 4);

    // Every mutation was persisted: a fresh engine sees the same state
    let reloaded = typical_engine_reload(&dir);
    assert_eq!(reloaded.model().book(), engine.model().book());
}

#[test]
fn test_add_duplicate_is_rejected_and_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    let err = engine
        .execute("add n/Alice Pauline p/94351253 e/alice@example.com a/311, Clementi Ave 2, #02-25 v/2020-01-01")
        .unwrap_err();
    assert!(matches!(err, EngineError::Command(_)));
    assert_eq!(engine.model().book().len(), 4);

    let reloaded = typical_engine_reload(&dir);
    assert_eq!(reloaded.model().book().len(), 4);
}

#[test]
fn test_find_filters_and_indices_resolve_against_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    let outcome = engine.execute("find meier").unwrap();
    assert_eq!(outcome.message(), "2 patients listed!");
    assert_eq!(engine.model().filtered_len(), 2);

    // Index 1 of the filtered view is Benson Meier, not Alice Pauline
    let outcome = engine.execute("delete 1").unwrap();
    assert!(outcome.message().contains("Benson Meier"));
    assert_eq!(engine.model().book().len(), 3);
}

#[test]
fn test_list_resets_filter_regardless_of_prior_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    engine.execute("find kurz").unwrap();
    assert_eq!(engine.model().filtered_len(), 1);

    let outcome = engine.execute("list").unwrap();
    assert_eq!(outcome.message(), "Listed all patients");
    assert_eq!(engine.model().filter(), &Filter::All);
    assert_eq!(engine.model().filtered_len(), 4);

    // Listing an unfiltered model is a no-op with the same message
    let outcome = engine.execute("list").unwrap();
    assert_eq!(outcome.message(), "Listed all patients");
    assert_eq!(engine.model().filtered_len(), 4);
}

#[test]
fn test_prescription_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    engine.execute("prescribe 1 m/paracetamol m/ibuprofen").unwrap();
    assert_eq!(engine.model().book().patients()[0].medicines.len(), 2);

    // Prescribing the same medicine again fails
    let err = engine.execute("prescribe 1 m/paracetamol").unwrap_err();
    assert!(err.to_string().contains("Already prescribed"));

    engine.execute("unprescribe 1 m/paracetamol").unwrap();
    assert_eq!(engine.model().book().patients()[0].medicines.len(), 1);

    engine.execute("unprescribe 1 m/all").unwrap();
    assert!(engine.model().book().patients()[0].medicines.is_empty());

    // The final state survives a reload
    let reloaded = typical_engine_reload(&dir);
    assert!(reloaded.model().book().patients()[0].medicines.is_empty());
}

#[test]
fn test_invalid_input_surfaces_constraint_messages() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    let err = engine.execute("add n/Hoon Meier p/8482424").unwrap_err();
    assert!(err.to_string().starts_with("Invalid command format!"));

    let err = engine
        .execute("add n/Hoon Meier p/phone e/stefan@example.com a/little india v/2020-01-01")
        .unwrap_err();
    assert!(err.to_string().contains("only digits"));

    let err = engine
        .execute("add n/Hoon Meier p/8482424 e/stefan@example.com a/little india v/9999-01-01")
        .unwrap_err();
    assert!(err.to_string().contains("after today"));

    let err = engine.execute("archive 1").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command");

    // Nothing changed
    assert_eq!(engine.model().book().len(), 4);
}

#[test]
fn test_clear_then_exit() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = typical_engine(&dir);

    let outcome = engine.execute("clear").unwrap();
    assert_eq!(outcome.message(), "Patient book has been cleared!");
    assert!(engine.model().book().is_empty());

    let outcome = engine.execute("exit").unwrap();
    assert!(outcome.is_exit());

    let reloaded = typical_engine_reload(&dir);
    assert!(reloaded.model().book().is_empty());
}

/// Re-open the engine over the data file `typical_engine` created.
fn typical_engine_reload(dir: &tempfile::TempDir) -> patientbook::Engine {
    let storage = patientbook::JsonBookStorage::new(dir.path().join("patients.json"));
    patientbook::Engine::load(storage).unwrap()
}
