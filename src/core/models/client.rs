//! Client model
//!
//! A client is one card on the board. Only `status` and `priority` ever
//! change after a client is created.

use serde::{Deserialize, Deserializer, Serialize};

use super::Status;

/// Client identifier (database row id)
pub type ClientId = i64;

/// A tracked client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique, immutable identifier
    pub id: ClientId,

    /// Company name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Swimlane; `null` or missing means backlog
    #[serde(default, deserialize_with = "status_or_backlog")]
    pub status: Status,

    /// Rank within the lane, 1 is the top card
    pub priority: u32,
}

impl Client {
    /// Create a client
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        priority: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
            priority,
        }
    }
}

fn status_or_backlog<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Status>::deserialize(deserializer)?.unwrap_or_default())
}

/// The mutable part of a client as submitted for reconciliation
///
/// Name and description are never written back, so they are not carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientChange {
    /// Client to update
    pub id: ClientId,
    /// Desired status
    pub status: Status,
    /// Desired priority
    pub priority: u32,
}

impl ClientChange {
    /// Create a change record
    #[must_use]
    pub const fn new(id: ClientId, status: Status, priority: u32) -> Self {
        Self {
            id,
            status,
            priority,
        }
    }
}

impl From<&Client> for ClientChange {
    fn from(client: &Client) -> Self {
        Self::new(client.id, client.status, client.priority)
    }
}
