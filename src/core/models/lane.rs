//! Lane model
//!
//! A lane is the ordered list of clients sharing one status. Its invariant
//! is that priorities are exactly `1..=len` in list order, so every
//! mutation ends with a renumbering pass.
//!
//! Drop positions are computed as [`Rank`]s: priorities doubled, so the
//! "just before the sibling" slot (`sibling - 0.5`) is an exact integer.

use super::{Client, ClientId, Status};
use crate::core::error::BoardError;

/// Where a moved card is dropped in its destination lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately above the given sibling
    Before(ClientId),
    /// At the bottom of the lane
    End,
}

/// Sort key used while settling a dropped card, in half-priority units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u64);

impl Rank {
    /// Rank occupied by an existing card with the given priority
    #[must_use]
    pub fn of_priority(priority: u32) -> Self {
        Self(u64::from(priority) * 2)
    }

    /// The rank as a (possibly fractional) priority
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_priority(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

/// Ordered clients of one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    status: Status,
    clients: Vec<Client>,
}

impl Lane {
    /// Create an empty lane
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            clients: Vec::new(),
        }
    }

    /// Build a lane from clients in any order
    ///
    /// Clients are sorted by priority (ties by id) and renumbered, so a
    /// stale or gappy input comes out normalized.
    pub fn from_clients(status: Status, clients: impl IntoIterator<Item = Client>) -> Self {
        let mut lane = Self {
            status,
            clients: clients
                .into_iter()
                .map(|mut c| {
                    c.status = status;
                    c
                })
                .collect(),
        };
        lane.normalize();
        lane
    }

    /// Status shared by every client in this lane
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Number of clients
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the lane has no clients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Clients, top to bottom
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Index of a client in the lane
    #[must_use]
    pub fn position(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|c| c.id == id)
    }

    /// Look up a client
    #[must_use]
    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Whether the lane contains the client
    #[must_use]
    pub fn contains(&self, id: ClientId) -> bool {
        self.position(id).is_some()
    }

    /// Take a client out of the lane and close the gap it leaves
    pub fn remove(&mut self, id: ClientId) -> Option<Client> {
        let index = self.position(id)?;
        let client = self.clients.remove(index);
        self.normalize();
        Some(client)
    }

    /// Rank a card would be dropped at, given the lane's current contents
    pub fn placement_rank(&self, placement: Placement) -> Result<Rank, BoardError> {
        match placement {
            Placement::Before(sibling) => {
                let sibling = self.get(sibling).ok_or_else(|| {
                    BoardError::invalid(
                        "Invalid sibling provided.",
                        format!(
                            "Client {sibling} is not in the {} lane.",
                            self.status.as_str()
                        ),
                    )
                })?;
                Ok(Rank(Rank::of_priority(sibling.priority).0.saturating_sub(1)))
            },
            Placement::End if self.is_empty() => Ok(Rank::of_priority(1)),
            Placement::End => Ok(Rank::of_priority(to_priority(self.len()))),
        }
    }

    /// Drop a client into the lane and renumber
    ///
    /// The client takes this lane's status. Existing cards keep their
    /// relative order; a dropped card that ties with an existing card
    /// settles below it. Returns the rank the card was placed at.
    pub fn insert(&mut self, mut client: Client, placement: Placement) -> Result<Rank, BoardError> {
        let rank = self.placement_rank(placement)?;
        client.status = self.status;

        let mut ranked: Vec<(Rank, bool, Client)> = self
            .clients
            .drain(..)
            .map(|c| (Rank::of_priority(c.priority), false, c))
            .collect();
        ranked.push((rank, true, client));
        ranked.sort_by(|a, b| (a.0, a.1, a.2.id).cmp(&(b.0, b.1, b.2.id)));

        self.clients = ranked.into_iter().map(|(_, _, c)| c).collect();
        self.renumber();
        Ok(rank)
    }

    /// Sort by priority (ties by id) and reassign `1..=len`
    fn normalize(&mut self) {
        self.clients.sort_by_key(|c| (c.priority, c.id));
        self.renumber();
    }

    fn renumber(&mut self) {
        for (index, client) in self.clients.iter_mut().enumerate() {
            client.priority = to_priority(index + 1);
        }
    }
}

fn to_priority(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
