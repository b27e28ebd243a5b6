//! Domain error types
//!
//! [`BoardError`] is what services return. [`StoreError`] is what store
//! implementations return; it knows whether a failure is worth retrying.

use thiserror::Error;

use super::models::ClientId;

/// Short message for a malformed or unknown id
pub const INVALID_ID: &str = "Invalid id provided.";
/// Detail for an id that is not an integer
pub const ID_NOT_INTEGER: &str = "Id can only be integer.";
/// Detail for an id with no stored client
pub const ID_NOT_FOUND: &str = "Cannot find client with that id.";
/// Short message for an unknown status
pub const INVALID_STATUS: &str = "Invalid status provided.";
/// Detail for an unknown status
pub const STATUS_VALUES: &str =
    "Status can only be one of the following: [backlog | in-progress | complete].";
/// Short message for a bad priority
pub const INVALID_PRIORITY: &str = "Invalid priority provided.";
/// Detail for a bad priority
pub const PRIORITY_VALUES: &str = "Priority can only be positive integer.";

/// Errors raised by board services
#[derive(Debug, Error)]
pub enum BoardError {
    /// Malformed id, status, priority or move request
    #[error("{message} {long_message}")]
    InvalidArgument {
        /// Short summary
        message: String,
        /// Detailed explanation
        long_message: String,
    },

    /// Id has no matching record
    #[error("{message} {long_message}")]
    NotFound {
        /// Short summary
        message: String,
        /// Detailed explanation
        long_message: String,
    },

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BoardError {
    /// Build an `InvalidArgument`
    pub fn invalid(message: impl Into<String>, long_message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            long_message: long_message.into(),
        }
    }

    /// Build a `NotFound`
    pub fn not_found(message: impl Into<String>, long_message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            long_message: long_message.into(),
        }
    }

    /// `NotFound` for a client id
    #[must_use]
    pub fn client_not_found(id: ClientId) -> Self {
        log::debug!("client {id} not found");
        Self::not_found(INVALID_ID, ID_NOT_FOUND)
    }

    /// Whether retrying the same operation might succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Store(err) => err.is_transient(),
            Self::InvalidArgument { .. } | Self::NotFound { .. } => false,
        }
    }
}

/// Errors raised by [`ClientStore`](super::ports::ClientStore) implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database is locked by another writer
    #[error("store busy: {0}")]
    Busy(String),

    /// Any other backend failure
    #[error("store error: {0}")]
    Backend(String),

    /// A stored row could not be turned into a client
    #[error("invalid persisted client data: {0}")]
    InvalidData(String),

    /// Database was written by a newer schema
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        /// Version found in the database
        db_version: u32,
        /// Newest version this build knows
        latest_supported: u32,
    },

    /// Insert collided with an existing id
    #[error("client {0} already exists")]
    Duplicate(ClientId),
}

impl StoreError {
    /// Whether the failure is a lock conflict that may clear on its own
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Busy(_))
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
