//! Drag-drop reordering
//!
//! Loads the board, applies a move with the same renumbering a UI uses, and
//! submits the resulting record set for reconciliation.

use serde::Serialize;

use super::reconcile::ReconcileOutcome;
use super::submit::{RetryPolicy, submit_with_retry};
use crate::core::error::BoardError;
use crate::core::models::{Board, ClientId, MoveReport, Placement, Status};
use crate::core::ports::ClientStore;

/// A move request as issued by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Client being dragged
    pub id: ClientId,
    /// Destination lane
    pub to: Status,
    /// Drop position in the destination lane
    pub placement: Placement,
}

/// Result of a persisted move
#[derive(Debug, Clone, Serialize)]
pub struct MoveOutcome {
    /// What the local renumbering did
    #[serde(rename = "move")]
    pub report: MoveReport,
    /// What reconciliation wrote
    pub reconcile: ReconcileOutcome,
    /// Board as re-read from the store
    #[serde(skip)]
    pub board: Board,
}

/// Apply `request` to the stored board and persist it
pub fn move_client(
    store: &dyn ClientStore,
    request: MoveRequest,
    policy: &RetryPolicy,
) -> Result<MoveOutcome, BoardError> {
    let mut board = Board::from_clients(store.list_all()?);
    let report = board.move_client(request.id, request.to, request.placement)?;

    let reconciled = submit_with_retry(store, &board.changes(), policy)?;

    Ok(MoveOutcome {
        report,
        reconcile: reconciled.outcome,
        board: Board::from_clients(reconciled.clients),
    })
}
