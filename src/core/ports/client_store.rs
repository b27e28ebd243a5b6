//! Client store port
//!
//! Defines the interface for reading and mutating persisted clients.

use super::super::error::StoreResult;
use super::super::models::{Client, ClientChange, ClientId, Status};
use super::super::services::reconcile::ReconcileOutcome;

/// Persistent table of clients
///
/// The store is the sole authority for status and priority. Handles are
/// shared between request handlers, so implementations must be safe to
/// call from several threads.
pub trait ClientStore: Send + Sync {
    /// All clients ordered by id
    fn list_all(&self) -> StoreResult<Vec<Client>>;

    /// Clients in one lane ordered by priority, then id
    fn list_by_status(&self, status: Status) -> StoreResult<Vec<Client>>;

    /// Look up a single client
    fn get(&self, id: ClientId) -> StoreResult<Option<Client>>;

    /// Insert a new client
    ///
    /// Only used for seeding; the board itself never creates clients.
    fn insert(&self, client: &Client) -> StoreResult<()>;

    /// Reconcile submitted changes against stored state atomically
    ///
    /// Implementations must read the current rows and apply the plan from
    /// [`reconcile::plan`](super::super::services::reconcile::plan) inside
    /// one transaction, so either every update lands or none does.
    fn apply_changes(&self, changes: &[ClientChange]) -> StoreResult<ReconcileOutcome>;

    /// Number of stored clients
    fn count(&self) -> StoreResult<usize> {
        Ok(self.list_all()?.len())
    }
}
