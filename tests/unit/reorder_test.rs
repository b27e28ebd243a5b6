//! Tests for persisted drag-drop moves

use shiptivity::core::BoardError;
use shiptivity::core::models::{Placement, Status};
use shiptivity::core::ports::ClientStore;
use shiptivity::core::services::{MoveRequest, RetryPolicy, move_client};

use crate::common::mocks::{Failure, MockClientStore};
use crate::common::{TestDb, client, memory_store};

fn request(id: i64, to: Status, placement: Placement) -> MoveRequest {
    MoveRequest { id, to, placement }
}

#[test]
fn test_move_to_empty_lane_persists() {
    let store = memory_store(&[client(1, Status::Backlog, 1), client(2, Status::Backlog, 2)]);

    let outcome = move_client(
        &store,
        request(1, Status::Complete, Placement::End),
        &RetryPolicy::no_retry(),
    )
    .unwrap();

    assert_eq!(outcome.report.priority, 1);
    assert_eq!(outcome.reconcile.updated, 2);

    let moved = store.get(1).unwrap().unwrap();
    assert_eq!((moved.status, moved.priority), (Status::Complete, 1));
    let stayed = store.get(2).unwrap().unwrap();
    assert_eq!((stayed.status, stayed.priority), (Status::Backlog, 1));

    assert_eq!(outcome.board.lane(Status::Complete).len(), 1);
}

#[test]
fn test_move_before_sibling_on_seeded_board() {
    let db = TestDb::new();
    let store = db.seeded();

    let target = store.list_by_status(Status::InProgress).unwrap();
    let sibling = target[1].id;
    let moving = store.list_by_status(Status::Backlog).unwrap()[0].id;

    move_client(
        &store,
        request(moving, Status::InProgress, Placement::Before(sibling)),
        &RetryPolicy::default(),
    )
    .unwrap();

    let lane = store.list_by_status(Status::InProgress).unwrap();
    let ids: Vec<i64> = lane.iter().map(|c| c.id).collect();
    assert_eq!(ids[1], moving);
    assert_eq!(ids[2], sibling);
    let priorities: Vec<u32> = lane.iter().map(|c| c.priority).collect();
    let expected: Vec<u32> = (1..=u32::try_from(lane.len()).unwrap()).collect();
    assert_eq!(priorities, expected);
}

#[test]
fn test_move_unknown_client_writes_nothing() {
    let store = MockClientStore::with_clients(vec![client(1, Status::Backlog, 1)]);

    let err = move_client(
        &store,
        request(9, Status::Complete, Placement::End),
        &RetryPolicy::no_retry(),
    )
    .unwrap_err();

    assert!(matches!(err, BoardError::NotFound { .. }));
    assert_eq!(store.apply_calls(), 0);
}

#[test]
fn test_move_retries_through_lock_contention() {
    let store = MockClientStore::with_clients(vec![client(1, Status::Backlog, 1)]);
    store.fail_next(&[Failure::Busy]);

    let policy = RetryPolicy {
        initial_delay: std::time::Duration::from_millis(1),
        ..RetryPolicy::default()
    };
    let outcome = move_client(&store, request(1, Status::InProgress, Placement::End), &policy)
        .unwrap();

    assert_eq!(store.apply_calls(), 2);
    assert_eq!(outcome.board.status_of(1), Some(Status::InProgress));
}
