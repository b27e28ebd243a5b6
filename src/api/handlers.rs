//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take a store handle and typed input, and return `Result<T, ApiError>`.

use super::error::ApiError;
use super::types::{INDEX_MESSAGE, IndexData, ListClientsQuery, SubmittedClient};
use crate::core::models::{Client, ClientChange};
use crate::core::ports::ClientStore;
use crate::core::services::{QueryService, parse_optional_status, reconcile, validate_priority};

// =============================================================================
// INDEX
// =============================================================================

/// API banner
#[must_use]
pub const fn index() -> IndexData {
    IndexData {
        message: INDEX_MESSAGE,
    }
}

// =============================================================================
// CLIENTS
// =============================================================================

/// List clients, optionally filtered by status
pub fn list_clients(
    store: &dyn ClientStore,
    query: &ListClientsQuery,
) -> Result<Vec<Client>, ApiError> {
    Ok(QueryService::new(store).list(query.status.as_deref())?)
}

/// Get a single client by its raw path id
pub fn get_client(store: &dyn ClientStore, id: &str) -> Result<Client, ApiError> {
    Ok(QueryService::new(store).get_by_id(id)?)
}

/// Reconcile a full submitted record set and return the refreshed set
///
/// The whole body is validated before anything is written.
pub fn update_clients(
    store: &dyn ClientStore,
    submitted: &[SubmittedClient],
) -> Result<Vec<Client>, ApiError> {
    let changes = submitted
        .iter()
        .map(|record| {
            Ok(ClientChange::new(
                record.id,
                parse_optional_status(record.status.as_deref())?,
                validate_priority(record.priority)?,
            ))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let reconciled = reconcile(store, &changes)?;
    Ok(reconciled.clients)
}
