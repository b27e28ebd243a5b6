//! Sample clients for a fresh board

use log::info;
use serde::Serialize;

use crate::core::error::{StoreError, StoreResult};
use crate::core::models::{Board, Client, Status};
use crate::core::ports::ClientStore;

const SAMPLE: &[(&str, &str, Status)] = &[
    ("Stark, White and Abbott", "Cloned Optimal Architecture", Status::InProgress),
    ("Wiza LLC", "Exclusive Bandwidth-Monitored Implementation", Status::Complete),
    ("Nolan LLC", "Vision-Oriented 4Thgeneration Graphicaluserinterface", Status::Backlog),
    ("Thompson PLC", "Streamlined Regional Knowledgeuser", Status::InProgress),
    ("Walker-Williamson", "Team-Oriented 6Thgeneration Matrix", Status::InProgress),
    ("Boehm and Sons", "Automated Systematic Paradigm", Status::Backlog),
    ("Runolfsson, Hegmann and Block", "Integrated Transitional Strategy", Status::Backlog),
    ("Schumm-Labadie", "Operative Heuristic Challenge", Status::Backlog),
    ("Kohler Group", "Re-Contextualized Multi-Tasking Attitude", Status::Backlog),
    ("Romaguera Inc", "Managed Foreground Toolset", Status::Backlog),
    ("Reilly-King", "Future-Proofed Interactive Toolset", Status::Complete),
    ("Emard, Champlin and Runolfsdottir", "Devolved Needs-Based Capability", Status::Backlog),
    ("Fritsch, Cronin and Wolff", "Open-Source 3Rdgeneration Website", Status::Complete),
    ("Borer LLC", "Profit-Focused Incremental Orchestration", Status::Backlog),
    ("Emmerich-Ankunding", "User-Centric Stable Extranet", Status::InProgress),
    ("Willms-Abbott", "Progressive Bandwidth-Monitored Access", Status::InProgress),
    ("Brekke PLC", "Intuitive User-Facing Customerloyalty", Status::Complete),
    ("Bins, Toy and Klocko", "Integrated Assymetric Software", Status::Backlog),
    ("Hodkiewicz-Hayes", "Programmable Systematic Securedline", Status::Backlog),
    ("Murphy, Lang and Ferry", "Organized Explicit Access", Status::Backlog),
];

/// What seeding did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Clients written
    pub inserted: usize,
    /// Sample ids that already existed
    pub existing: usize,
    /// Clients whose priority was rewritten to keep lanes dense
    pub renumbered: usize,
}

/// The sample board: ids `1..=20`, priorities dense within each lane
#[must_use]
pub fn sample_clients() -> Vec<Client> {
    let mut next_priority = [0_u32; 3];
    SAMPLE
        .iter()
        .zip(1..)
        .map(|(&(name, description, status), id)| {
            let slot = Status::ALL
                .iter()
                .position(|s| *s == status)
                .unwrap_or_default();
            next_priority[slot] += 1;
            Client::new(id, name, description, status, next_priority[slot])
        })
        .collect()
}

/// Insert the sample clients
///
/// Without `force`, a non-empty table is left alone. With `force`, missing
/// sample ids are inserted next to existing rows, then every lane is
/// renumbered so its stored priorities are `1..=len` again.
pub fn seed(store: &dyn ClientStore, force: bool) -> StoreResult<SeedReport> {
    let mut report = SeedReport {
        inserted: 0,
        existing: 0,
        renumbered: 0,
    };

    let stored = store.count()?;
    if !force && stored > 0 {
        report.existing = stored;
        info!("event=seed module=db status=skipped existing={}", report.existing);
        return Ok(report);
    }

    for client in sample_clients() {
        match store.insert(&client) {
            Ok(()) => report.inserted += 1,
            Err(StoreError::Duplicate(_)) => report.existing += 1,
            Err(err) => return Err(err),
        }
    }

    if report.inserted > 0 && stored > 0 {
        let changes = Board::from_clients(store.list_all()?).changes();
        report.renumbered = store.apply_changes(&changes)?.updated;
    }

    info!(
        "event=seed module=db status=ok inserted={} existing={} renumbered={}",
        report.inserted, report.existing, report.renumbered
    );
    Ok(report)
}
