//! Tests for reconciliation against a store

use shiptivity::core::models::{ClientChange, Status};
use shiptivity::core::ports::ClientStore;
use shiptivity::core::services::reconcile;

use crate::common::mocks::{Failure, MockClientStore};
use crate::common::{client, memory_store};

fn sample() -> Vec<shiptivity::core::models::Client> {
    vec![
        client(1, Status::Backlog, 1),
        client(2, Status::Backlog, 2),
        client(3, Status::InProgress, 1),
    ]
}

#[test]
fn test_reconcile_writes_only_changed_fields() {
    let store = memory_store(&sample());
    let changes = vec![
        ClientChange::new(1, Status::Complete, 1),
        ClientChange::new(2, Status::Backlog, 1),
        ClientChange::new(3, Status::InProgress, 1),
    ];

    let reconciled = reconcile(&store, &changes).unwrap();

    assert_eq!(reconciled.outcome.updated, 2);
    assert_eq!(reconciled.outcome.fields_written, 2);
    assert_eq!(reconciled.outcome.unchanged, 1);
    assert_eq!(reconciled.clients.len(), 3);

    let first = store.get(1).unwrap().unwrap();
    assert_eq!(first.status, Status::Complete);
    assert_eq!(first.priority, 1);
    assert_eq!(store.get(2).unwrap().unwrap().priority, 1);
}

#[test]
fn test_reconcile_is_idempotent() {
    let store = memory_store(&sample());
    let changes = vec![
        ClientChange::new(1, Status::InProgress, 2),
        ClientChange::new(2, Status::Backlog, 1),
    ];

    let first = reconcile(&store, &changes).unwrap();
    let second = reconcile(&store, &changes).unwrap();

    assert_eq!(first.outcome.updated, 2);
    assert_eq!(second.outcome.updated, 0);
    assert_eq!(second.outcome.unchanged, 2);
    assert_eq!(first.clients, second.clients);
}

#[test]
fn test_reconcile_skips_unknown_ids() {
    let store = memory_store(&sample());
    let changes = vec![
        ClientChange::new(404, Status::Complete, 1),
        ClientChange::new(1, Status::Complete, 1),
    ];

    let reconciled = reconcile(&store, &changes).unwrap();

    assert_eq!(reconciled.outcome.skipped, vec![404]);
    assert_eq!(reconciled.outcome.updated, 1);
    assert!(store.get(404).unwrap().is_none());
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_reconcile_returns_full_set_in_id_order() {
    let store = memory_store(&sample());
    let reconciled = reconcile(&store, &[ClientChange::new(3, Status::Backlog, 3)]).unwrap();
    let ids: Vec<i64> = reconciled.clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_reconcile_surfaces_store_errors() {
    let store = MockClientStore::with_clients(sample());
    store.fail_next(&[Failure::Backend]);

    let err = reconcile(&store, &[ClientChange::new(1, Status::Complete, 1)]).unwrap_err();

    assert!(!err.is_transient());
    assert_eq!(store.snapshot(), sample());
}
