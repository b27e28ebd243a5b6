//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Board, Client, Status};
use crate::core::services::MoveOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One lane as rendered
#[derive(Debug, Serialize)]
pub struct LaneView {
    /// Lane status
    pub status: Status,
    /// Clients, top to bottom
    pub clients: Vec<Client>,
}

/// The board as rendered
#[derive(Debug, Serialize)]
pub struct BoardView {
    /// Lanes in board order
    pub lanes: Vec<LaneView>,
}

impl BoardView {
    /// Snapshot a board, optionally keeping a single lane
    #[must_use]
    pub fn new(board: &Board, only: Option<Status>) -> Self {
        let lanes = board
            .lanes()
            .iter()
            .filter(|lane| only.is_none_or(|s| s == lane.status()))
            .map(|lane| LaneView {
                status: lane.status(),
                clients: lane.clients().to_vec(),
            })
            .collect();
        Self { lanes }
    }

    /// Render the board based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for lane in &self.lanes {
            println!(
                "{} ({})",
                lane_title(lane.status).bold(),
                lane.clients.len()
            );
            if lane.clients.is_empty() {
                println!("  {}", "(empty)".dimmed());
            }
            for client in &lane.clients {
                println!(
                    "  {:>3}. [{}] {}",
                    client.priority,
                    client.id.to_string().dimmed(),
                    client.name
                );
            }
            println!();
        }
    }
}

/// Render a single client
pub fn render_client(client: &Client, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            println!("[{}] {}", client.id, client.name.bold());
            if !client.description.is_empty() {
                println!("  {}", client.description);
            }
            println!("  status:   {}", lane_title(client.status));
            println!("  priority: {}", client.priority);
        },
        OutputMode::Json => render_json(client),
    }
}

/// Render the result of a move
pub fn render_move(outcome: &MoveOutcome, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            let report = &outcome.report;
            println!(
                "Moved client {} from {} to {} (priority {})",
                report.id,
                lane_title(report.from),
                lane_title(report.to),
                report.priority
            );
            println!(
                "  {} client(s) updated, {} unchanged",
                outcome.reconcile.updated, outcome.reconcile.unchanged
            );
        },
        OutputMode::Json => render_json(outcome),
    }
}

fn lane_title(status: Status) -> colored::ColoredString {
    match status {
        Status::Backlog => status.title().yellow(),
        Status::InProgress => status.title().cyan(),
        Status::Complete => status.title().green(),
    }
}

/// Print any serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
