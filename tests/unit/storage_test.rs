//! Tests for the SQLite client store

use rusqlite::Connection;
use shiptivity::adapters::sqlite::{
    SqliteClientStore, migrations, open_db, sample_clients, seed,
};
use shiptivity::core::StoreError;
use shiptivity::core::models::{ClientChange, Status};
use shiptivity::core::ports::ClientStore;

use crate::common::{TestDb, client, memory_store};

// =============================================================================
// MIGRATIONS
// =============================================================================

#[test]
fn test_open_applies_migrations() {
    let db = TestDb::new();
    let conn = open_db(db.path()).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, migrations::latest_version());
}

#[test]
fn test_reopen_is_a_no_op() {
    let db = TestDb::new();
    let store = db.seeded();
    drop(store);

    let store = db.open();
    assert_eq!(store.count().unwrap(), 20);
}

#[test]
fn test_newer_schema_is_rejected() {
    let db = TestDb::new();
    {
        let conn = Connection::open(db.path()).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    let err = SqliteClientStore::open(db.path()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnsupportedSchemaVersion { db_version: 99, .. }
    ));
}

// =============================================================================
// READS
// =============================================================================

#[test]
fn test_list_all_is_ordered_by_id() {
    let store = memory_store(&[
        client(3, Status::Complete, 1),
        client(1, Status::Backlog, 1),
        client(2, Status::Backlog, 2),
    ]);
    let ids: Vec<i64> = store.list_all().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_list_by_status_is_ordered_by_priority() {
    let store = memory_store(&[
        client(1, Status::Backlog, 3),
        client(2, Status::Backlog, 1),
        client(3, Status::Complete, 1),
        client(4, Status::Backlog, 2),
    ]);
    let ids: Vec<i64> = store
        .list_by_status(Status::Backlog)
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![2, 4, 1]);
}

#[test]
fn test_null_status_reads_as_backlog() {
    let db = TestDb::new();
    let conn = open_db(db.path()).unwrap();
    conn.execute_batch(
        "INSERT INTO clients (id, name, description, status, priority)
         VALUES (1, 'Null Co', 'no status', NULL, 1),
                (2, 'Blank Co', 'empty status', '', 2);",
    )
    .unwrap();
    let store = SqliteClientStore::from_connection(conn);

    assert_eq!(store.get(1).unwrap().unwrap().status, Status::Backlog);
    assert_eq!(store.list_by_status(Status::Backlog).unwrap().len(), 2);
}

#[test]
fn test_get_missing_is_none() {
    let store = memory_store(&[client(1, Status::Backlog, 1)]);
    assert!(store.get(2).unwrap().is_none());
}

#[test]
fn test_corrupt_status_is_reported() {
    let db = TestDb::new();
    let conn = open_db(db.path()).unwrap();
    conn.execute_batch(
        "INSERT INTO clients (id, name, status, priority) VALUES (1, 'Odd', 'archived', 1);",
    )
    .unwrap();
    let store = SqliteClientStore::from_connection(conn);

    assert!(matches!(store.get(1), Err(StoreError::InvalidData(_))));
}

// =============================================================================
// WRITES
// =============================================================================

#[test]
fn test_duplicate_insert_is_reported() {
    let store = memory_store(&[client(1, Status::Backlog, 1)]);
    let err = store.insert(&client(1, Status::Complete, 1)).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(1)));
}

#[test]
fn test_failed_batch_rolls_back() {
    let db = TestDb::new();
    let conn = open_db(db.path()).unwrap();
    conn.execute_batch(
        "INSERT INTO clients (id, name, status, priority)
         VALUES (1, 'A', 'backlog', 1), (2, 'B', 'backlog', 2);
         CREATE TRIGGER reject_two BEFORE UPDATE ON clients WHEN NEW.id = 2
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();
    let store = SqliteClientStore::from_connection(conn);

    let result = store.apply_changes(&[
        ClientChange::new(1, Status::Complete, 1),
        ClientChange::new(2, Status::Backlog, 1),
    ]);

    assert!(result.is_err());
    let first = store.get(1).unwrap().unwrap();
    assert_eq!(first.status, Status::Backlog);
    let second = store.get(2).unwrap().unwrap();
    assert_eq!(second.priority, 2);
}

#[test]
fn test_apply_changes_reports_outcome() {
    let store = memory_store(&[client(1, Status::Backlog, 1), client(2, Status::Backlog, 2)]);
    let outcome = store
        .apply_changes(&[
            ClientChange::new(2, Status::Backlog, 1),
            ClientChange::new(1, Status::Backlog, 2),
            ClientChange::new(7, Status::Backlog, 3),
        ])
        .unwrap();
    assert_eq!(outcome.updated, 2);
    assert_eq!(outcome.fields_written, 2);
    assert_eq!(outcome.skipped, vec![7]);
}

// =============================================================================
// SEEDING
// =============================================================================

#[test]
fn test_seed_fills_empty_store() {
    let store = memory_store(&[]);
    let report = seed(&store, false).unwrap();
    assert_eq!(report.inserted, 20);
    assert_eq!(store.list_all().unwrap(), sample_clients());
}

#[test]
fn test_seed_leaves_populated_store_alone() {
    let store = memory_store(&[client(1, Status::Complete, 1)]);
    let report = seed(&store, false).unwrap();
    assert_eq!(report.inserted, 0);
    assert_eq!(report.existing, 1);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_forced_seed_keeps_existing_rows() {
    let store = memory_store(&[client(1, Status::Complete, 1)]);
    let report = seed(&store, true).unwrap();
    assert_eq!(report.inserted, 19);
    assert_eq!(report.existing, 1);
    assert_eq!(store.get(1).unwrap().unwrap().status, Status::Complete);
}

#[test]
fn test_forced_seed_keeps_lanes_dense() {
    let store = memory_store(&[
        client(100, Status::Backlog, 1),
        client(101, Status::InProgress, 1),
        client(102, Status::Complete, 1),
    ]);

    let report = seed(&store, true).unwrap();

    assert_eq!(report.inserted, 20);
    assert!(report.renumbered > 0);
    for status in Status::ALL {
        let priorities: Vec<u32> = store
            .list_by_status(status)
            .unwrap()
            .iter()
            .map(|c| c.priority)
            .collect();
        let expected: Vec<u32> = (1..=u32::try_from(priorities.len()).unwrap()).collect();
        assert_eq!(priorities, expected, "{status} lane");
    }
}

#[test]
fn test_seed_into_empty_store_renumbers_nothing() {
    let store = memory_store(&[]);
    assert_eq!(seed(&store, true).unwrap().renumbered, 0);
}
