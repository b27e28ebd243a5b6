//! Reconciliation engine
//!
//! Diffs a submitted full record set against stored state and applies only
//! the fields that changed.
//!
//! # Invariants
//! - Status and priority are compared independently; a client needs zero,
//!   one or two field updates.
//! - Ids with no stored client are skipped, never created.
//! - The diff is keyed by id, so it is linear in the number of clients.
//! - Applying the same set twice produces no updates the second time.

use std::collections::HashMap;
use std::time::Instant;

use log::{error, info, warn};
use serde::Serialize;

use crate::core::error::BoardError;
use crate::core::models::{Client, ClientChange, ClientId, Status};
use crate::core::ports::ClientStore;

/// Field updates for one stored client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientUpdate {
    /// Client to update
    pub id: ClientId,
    /// New status, if it differs
    pub status: Option<Status>,
    /// New priority, if it differs
    pub priority: Option<u32>,
}

impl ClientUpdate {
    /// Number of columns this update writes
    #[must_use]
    pub fn field_count(&self) -> usize {
        usize::from(self.status.is_some()) + usize::from(self.priority.is_some())
    }
}

/// The minimal set of writes needed to reach a submitted state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Clients with at least one differing field
    pub updates: Vec<ClientUpdate>,
    /// Submitted clients that already match storage
    pub unchanged: usize,
    /// Submitted ids with no stored client
    pub skipped: Vec<ClientId>,
}

/// Summary of an applied reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileOutcome {
    /// Clients that had at least one field written
    pub updated: usize,
    /// Columns written in total
    pub fields_written: usize,
    /// Clients that already matched
    pub unchanged: usize,
    /// Submitted ids that did not resolve
    pub skipped: Vec<ClientId>,
}

impl From<&ReconcilePlan> for ReconcileOutcome {
    fn from(plan: &ReconcilePlan) -> Self {
        Self {
            updated: plan.updates.len(),
            fields_written: plan.updates.iter().map(ClientUpdate::field_count).sum(),
            unchanged: plan.unchanged,
            skipped: plan.skipped.clone(),
        }
    }
}

/// Refreshed state after a reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// What was written
    pub outcome: ReconcileOutcome,
    /// Every stored client, read after the write
    pub clients: Vec<Client>,
}

/// Compute the updates that turn `stored` into `submitted`
///
/// If an id is submitted more than once, the last occurrence wins.
/// Updates are listed in order of first submission.
#[must_use]
pub fn plan(stored: &[Client], submitted: &[ClientChange]) -> ReconcilePlan {
    let current: HashMap<ClientId, &Client> = stored.iter().map(|c| (c.id, c)).collect();

    let mut order: Vec<ClientId> = Vec::with_capacity(submitted.len());
    let mut latest: HashMap<ClientId, &ClientChange> = HashMap::with_capacity(submitted.len());
    for change in submitted {
        if latest.insert(change.id, change).is_none() {
            order.push(change.id);
        }
    }

    let mut result = ReconcilePlan::default();
    for id in order {
        let change = latest[&id];
        let Some(existing) = current.get(&id) else {
            result.skipped.push(id);
            continue;
        };

        let update = ClientUpdate {
            id,
            status: (existing.status != change.status).then_some(change.status),
            priority: (existing.priority != change.priority).then_some(change.priority),
        };
        if update.field_count() == 0 {
            result.unchanged += 1;
        } else {
            result.updates.push(update);
        }
    }
    result
}

/// Apply a submitted record set and return the refreshed store contents
pub fn reconcile(
    store: &dyn ClientStore,
    changes: &[ClientChange],
) -> Result<Reconciled, BoardError> {
    let started_at = Instant::now();

    let outcome = match store.apply_changes(changes) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(
                "event=reconcile module=reconcile status=error submitted={} duration_ms={} error={}",
                changes.len(),
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        },
    };

    if !outcome.skipped.is_empty() {
        warn!(
            "event=reconcile module=reconcile status=skipped ids={:?}",
            outcome.skipped
        );
    }
    info!(
        "event=reconcile module=reconcile status=ok submitted={} updated={} fields={} duration_ms={}",
        changes.len(),
        outcome.updated,
        outcome.fields_written,
        started_at.elapsed().as_millis()
    );

    let clients = store.list_all()?;
    Ok(Reconciled { outcome, clients })
}
