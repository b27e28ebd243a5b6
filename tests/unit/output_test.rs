//! Tests for output formatting

use shiptivity::core::models::{Board, Status};
use shiptivity::output::{BoardView, OutputMode};

use crate::common::client;

fn board() -> Board {
    Board::from_clients(vec![
        client(1, Status::Backlog, 1),
        client(2, Status::InProgress, 1),
        client(3, Status::Backlog, 2),
    ])
}

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_board_view_has_every_lane() {
    let view = BoardView::new(&board(), None);
    let statuses: Vec<Status> = view.lanes.iter().map(|l| l.status).collect();
    assert_eq!(
        statuses,
        vec![Status::Backlog, Status::InProgress, Status::Complete]
    );
    assert!(view.lanes[2].clients.is_empty());
}

#[test]
fn test_board_view_single_lane() {
    let view = BoardView::new(&board(), Some(Status::Backlog));
    assert_eq!(view.lanes.len(), 1);
    let ids: Vec<i64> = view.lanes[0].clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_board_view_json_shape() {
    let view = BoardView::new(&board(), Some(Status::InProgress));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["lanes"][0]["status"], "in-progress");
    assert_eq!(json["lanes"][0]["clients"][0]["id"], 2);
    assert_eq!(json["lanes"][0]["clients"][0]["priority"], 1);
}
