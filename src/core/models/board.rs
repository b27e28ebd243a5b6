//! Board model
//!
//! The full record set partitioned into the three status lanes. Moving a
//! card here is the same renumbering a UI performs on drag-drop, so the
//! board it produces can be submitted as-is for reconciliation.

use serde::Serialize;

use super::{Client, ClientChange, ClientId, Lane, Placement, Rank, Status};
use crate::core::error::BoardError;

/// Three lanes, one per status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    lanes: [Lane; 3],
}

/// What a move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Client that moved
    pub id: ClientId,
    /// Lane it left
    pub from: Status,
    /// Lane it joined
    pub to: Status,
    /// Final priority in the destination lane
    pub priority: u32,
    /// Rank it was dropped at before renumbering
    #[serde(skip)]
    pub rank: Rank,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            lanes: Status::ALL.map(Lane::new),
        }
    }
}

impl Board {
    /// Partition clients into lanes, normalizing each lane
    pub fn from_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let mut buckets: [Vec<Client>; 3] = Default::default();
        for client in clients {
            buckets[lane_index(client.status)].push(client);
        }
        let mut buckets = buckets.into_iter();
        Self {
            lanes: Status::ALL
                .map(|status| Lane::from_clients(status, buckets.next().unwrap_or_default())),
        }
    }

    /// Lane for a status
    #[must_use]
    pub const fn lane(&self, status: Status) -> &Lane {
        &self.lanes[lane_index(status)]
    }

    /// All lanes in board order
    #[must_use]
    pub const fn lanes(&self) -> &[Lane; 3] {
        &self.lanes
    }

    /// Total number of clients
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Whether the board has no clients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Lane::is_empty)
    }

    /// Lane a client currently sits in
    #[must_use]
    pub fn status_of(&self, id: ClientId) -> Option<Status> {
        self.lanes
            .iter()
            .find(|lane| lane.contains(id))
            .map(Lane::status)
    }

    /// Look up a client
    #[must_use]
    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.lanes.iter().find_map(|lane| lane.get(id))
    }

    /// Move a client to `to`, dropping it at `placement`
    ///
    /// The source lane closes its gap and the destination lane is
    /// renumbered. Moving within one lane is the same operation. On error
    /// the board is left unchanged.
    pub fn move_client(
        &mut self,
        id: ClientId,
        to: Status,
        placement: Placement,
    ) -> Result<MoveReport, BoardError> {
        let from = self.status_of(id).ok_or_else(|| BoardError::client_not_found(id))?;

        if let Placement::Before(sibling) = placement {
            if sibling == id {
                return Err(BoardError::invalid(
                    "Invalid sibling provided.",
                    "A client cannot be placed before itself.",
                ));
            }
            // Validate up front so a bad sibling cannot strand the client
            self.lane(to).placement_rank(placement)?;
        }

        let client = self.lanes[lane_index(from)]
            .remove(id)
            .ok_or_else(|| BoardError::client_not_found(id))?;
        let rank = self.lanes[lane_index(to)].insert(client, placement)?;
        let priority = self
            .lane(to)
            .get(id)
            .map_or(0, |client| client.priority);

        log::debug!("moved client {id} from {from} to {to} at priority {priority}");

        Ok(MoveReport {
            id,
            from,
            to,
            priority,
            rank,
        })
    }

    /// Every client, lane by lane, top to bottom
    #[must_use]
    pub fn clients(&self) -> Vec<Client> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.clients().iter().cloned())
            .collect()
    }

    /// Every client as a reconciliation change
    #[must_use]
    pub fn changes(&self) -> Vec<ClientChange> {
        self.lanes
            .iter()
            .flat_map(Lane::clients)
            .map(ClientChange::from)
            .collect()
    }
}

const fn lane_index(status: Status) -> usize {
    match status {
        Status::Backlog => 0,
        Status::InProgress => 1,
        Status::Complete => 2,
    }
}
