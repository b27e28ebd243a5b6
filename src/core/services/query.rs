//! Query service
//!
//! Read-only access to clients with request validation applied.

use super::validation::{parse_id, parse_status};
use crate::core::error::BoardError;
use crate::core::models::{Board, Client};
use crate::core::ports::ClientStore;

/// Read operations over a client store
#[derive(Clone, Copy)]
pub struct QueryService<'a> {
    store: &'a dyn ClientStore,
}

impl std::fmt::Debug for QueryService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService").finish_non_exhaustive()
    }
}

impl<'a> QueryService<'a> {
    /// Wrap a store handle
    #[must_use]
    pub const fn new(store: &'a dyn ClientStore) -> Self {
        Self { store }
    }

    /// Every client, ordered by id
    pub fn list_all(&self) -> Result<Vec<Client>, BoardError> {
        Ok(self.store.list_all()?)
    }

    /// Clients in the lane named by `status`
    pub fn list_by_status(&self, status: &str) -> Result<Vec<Client>, BoardError> {
        let status = parse_status(status)?;
        Ok(self.store.list_by_status(status)?)
    }

    /// Clients optionally filtered by lane; an empty filter means all
    pub fn list(&self, status: Option<&str>) -> Result<Vec<Client>, BoardError> {
        match status {
            Some(s) if !s.is_empty() => self.list_by_status(s),
            _ => self.list_all(),
        }
    }

    /// One client by id
    pub fn get_by_id(&self, id: &str) -> Result<Client, BoardError> {
        let id = parse_id(id)?;
        self.store
            .get(id)?
            .ok_or_else(|| BoardError::client_not_found(id))
    }

    /// The whole board, partitioned and normalized
    pub fn board(&self) -> Result<Board, BoardError> {
        Ok(Board::from_clients(self.list_all()?))
    }
}
