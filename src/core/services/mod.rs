//! Business logic services
//!
//! Orchestration over domain models and the [`ClientStore`](super::ports::ClientStore)
//! port. Nothing here knows about SQL or HTTP.
//!
//! - [`query`] - Validated reads
//! - [`reconcile`] - Diff a submitted record set and apply it atomically
//! - [`reorder`] - Drag-drop a card and persist the renumbered board
//! - [`submit`] - Acknowledged submission with retry
//! - [`validation`] - Id, status and priority parsing

pub mod query;
pub mod reconcile;
pub mod reorder;
pub mod submit;
pub mod validation;

pub use query::QueryService;
pub use reconcile::{ClientUpdate, ReconcileOutcome, ReconcilePlan, Reconciled, plan, reconcile};
pub use reorder::{MoveOutcome, MoveRequest, move_client};
pub use submit::{RetryPolicy, submit_with_retry};
pub use validation::{parse_id, parse_optional_status, parse_status, validate_priority};
