//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.
//! Success bodies are the bare records (or arrays of records); errors are
//! [`ApiErrorData`](super::error::ApiErrorData).

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::core::models::ClientId;

/// Banner returned by `GET /`
pub const INDEX_MESSAGE: &str = "SHIPTIVITY API. Read documentation to see API docs";

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// One record of the `PUT /clients` body
///
/// Name and description are accepted so a client can send back exactly
/// what it fetched, but only status and priority are applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmittedClient {
    /// Client id
    pub id: ClientId,
    /// Ignored
    #[serde(default)]
    pub name: Option<String>,
    /// Ignored
    #[serde(default)]
    pub description: Option<String>,
    /// Desired status; missing or null means backlog
    #[serde(default)]
    pub status: Option<String>,
    /// Desired priority; must be a whole, non-negative number
    pub priority: f64,
}

/// Query string of `GET /clients`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListClientsQuery {
    /// Optional lane filter
    pub status: Option<String>,
}

impl ListClientsQuery {
    /// Parse a raw query string (`status=backlog&...`)
    ///
    /// Values are form-decoded, so `in%2Dprogress` and `in-progress` are the
    /// same filter. The first `status` pair wins.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let status = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value.into_owned());
        Self { status }
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Body of `GET /`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndexData {
    /// Banner text
    pub message: &'static str,
}
