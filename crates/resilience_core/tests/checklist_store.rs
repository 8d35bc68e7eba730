use resilience_core::db::{open_db, open_db_in_memory};
use resilience_core::{
    ChecklistState, ChecklistStore, ExportDocument, ImportError, LoadOutcome,
    SqliteStateRepository, StateRepository,
};

#[test]
fn load_from_empty_storage_falls_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    let (store, outcome) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    assert_eq!(outcome, LoadOutcome::DefaultFallback);
    assert_eq!(store.state(), &ChecklistState::default_for_catalog());
}

#[test]
fn load_from_corrupted_storage_matches_fresh_initialization() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    repo.write_raw("{not json").unwrap();

    let (store, outcome) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    assert_eq!(outcome, LoadOutcome::DefaultFallback);
    assert_eq!(store.state(), &ChecklistState::default_for_catalog());
}

#[test]
fn toggle_writes_through_and_reloads() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    assert!(store.toggle("finances", 2).unwrap());
    assert_eq!(
        store.state().flags("finances").unwrap(),
        &[false, false, true, false]
    );
    drop(store);

    let (reloaded, outcome) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(
        reloaded.state().flags("finances").unwrap(),
        &[false, false, true, false]
    );
}

#[test]
fn toggle_twice_restores_original_state() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    let baseline = store.state().clone();

    assert!(store.toggle("travel", 1).unwrap());
    assert!(store.toggle("travel", 1).unwrap());

    assert_eq!(store.state(), &baseline);
}

#[test]
fn toggle_on_unknown_domain_skips_the_save() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    assert!(!store.toggle("unknown", 0).unwrap());
    assert!(!store.toggle("finances", 99).unwrap());

    // Nothing was mutated, so nothing was persisted either.
    let probe = SqliteStateRepository::new(&conn);
    assert!(probe.read_raw().unwrap().is_none());
}

#[test]
fn state_survives_close_and_reopen_of_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resilience.db");

    {
        let conn = open_db(&path).unwrap();
        let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
        store.toggle("docs", 0).unwrap();
        store.toggle("docs", 3).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let (store, outcome) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(
        store.state().flags("docs").unwrap(),
        &[true, false, false, true]
    );
}

#[test]
fn reset_domain_clears_one_domain_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    store.toggle("finances", 0).unwrap();
    store.toggle("work", 1).unwrap();

    assert!(store.reset_domain("finances").unwrap());
    assert_eq!(
        store.state().flags("finances").unwrap(),
        &[false, false, false, false]
    );
    assert_eq!(store.state().flags("work").unwrap(), &[false, true, false, false]);

    let (reloaded, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    assert_eq!(reloaded.state(), store.state());
}

#[test]
fn reset_all_returns_to_fresh_state() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    store.toggle("pets", 2).unwrap();
    store.toggle("comms", 0).unwrap();

    store.reset_all().unwrap();

    assert_eq!(store.state(), &ChecklistState::default_for_catalog());
}

#[test]
fn export_then_import_round_trips_the_state() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    store.toggle("finances", 1).unwrap();
    store.toggle("indicators", 5).unwrap();
    let snapshot = store.state().clone();

    let exported = store.export_document();

    let other_conn = open_db_in_memory().unwrap();
    let (mut other, _) = ChecklistStore::load(SqliteStateRepository::new(&other_conn));
    other.import_document(&exported).unwrap();

    assert_eq!(other.state(), &snapshot);
}

#[test]
fn exported_document_is_pretty_printed_with_version_tag() {
    let conn = open_db_in_memory().unwrap();
    let (store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    let exported = store.export_document();
    assert!(exported.contains('\n'), "export should be human-readable");

    let parsed: ExportDocument = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed.version, 1);
    assert_eq!(&parsed.data, store.state());
}

#[test]
fn import_of_invalid_bytes_fails_and_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    store.toggle("housing", 2).unwrap();
    let before = store.state().clone();

    let err = store.import_document("{not json").unwrap_err();
    assert!(matches!(err, ImportError::Parse(_)));
    assert_eq!(store.state(), &before);

    // The persisted copy still reflects the pre-import state.
    let (reloaded, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    assert_eq!(reloaded.state(), &before);
}

#[test]
fn import_accepts_documents_that_do_not_match_the_catalog() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    store
        .import_document(r#"{"version":1,"data":{"finances":[true]}}"#)
        .unwrap();

    assert_eq!(store.state().flags("finances").unwrap(), &[true]);
    assert!(store.state().flags("travel").is_none());

    // Mutations against entries the import dropped become no-ops.
    assert!(!store.toggle("travel", 0).unwrap());
    assert!(!store.toggle("finances", 1).unwrap());
    assert!(store.toggle("finances", 0).unwrap());
}

#[test]
fn reset_all_recovers_catalog_shape_after_mismatched_import() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));

    store
        .import_document(r#"{"version":1,"data":{"finances":[true]}}"#)
        .unwrap();
    store.reset_all().unwrap();

    assert_eq!(store.state(), &ChecklistState::default_for_catalog());
    assert!(store.toggle("travel", 0).unwrap());

    // The rebuilt shape is what got persisted.
    let (reloaded, outcome) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(
        reloaded.state().flags("travel").unwrap(),
        &[true, false, false, false]
    );
}

#[test]
fn progress_reflects_toggles() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    store.toggle("finances", 0).unwrap();
    store.toggle("finances", 1).unwrap();

    let progress = store.progress();
    let finances = progress
        .totals
        .iter()
        .find(|domain| domain.id == "finances")
        .unwrap();
    assert_eq!(finances.done, 2);
    assert_eq!(finances.total, 4);
    assert_eq!(finances.percent(), 50);
    assert_eq!(progress.done, 2);
    assert_eq!(progress.total, resilience_core::catalog_item_total());
}
