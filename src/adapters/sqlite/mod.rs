//! SQLite storage for clients.
//!
//! - `open` - connection bootstrap (busy timeout, migrations)
//! - `migrations` - versioned schema tracked in `PRAGMA user_version`
//! - `store` - [`SqliteClientStore`], the [`ClientStore`](crate::core::ports::ClientStore) implementation
//! - `seed` - sample clients for a fresh board

pub mod migrations;
mod open;
mod seed;
mod store;

pub use open::{BUSY_TIMEOUT, open_db, open_db_in_memory};
pub use seed::{SeedReport, sample_clients, seed};
pub use store::SqliteClientStore;

use crate::core::error::StoreError;

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, _)
                if matches!(
                    failure.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                Self::Busy(err.to_string())
            },
            _ => Self::Backend(err.to_string()),
        }
    }
}
