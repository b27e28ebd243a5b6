//! Client status
//!
//! The three swimlanes of the board.

use serde::{Deserialize, Serialize};

/// Swimlane a client currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet (also the lane for clients with no status)
    #[default]
    Backlog,
    /// Being worked on
    InProgress,
    /// Shipped
    Complete,
}

impl Status {
    /// All statuses in board order (left to right)
    pub const ALL: [Self; 3] = [Self::Backlog, Self::InProgress, Self::Complete];

    /// Wire and database representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }

    /// Column heading shown on the board
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    /// Resolve an optional stored status, treating absence as backlog
    ///
    /// Returns `None` only when a value is present but unrecognised.
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(Self::Backlog),
            Some(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "in-progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(format!(
                "Invalid status: {s}. Use: backlog, in-progress, complete"
            )),
        }
    }
}
