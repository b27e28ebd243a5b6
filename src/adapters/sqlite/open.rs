//! Connection bootstrap utilities for SQLite.
//!
//! # Invariants
//! - Returned connections have a busy timeout configured.
//! - Returned connections have migrations fully applied.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info};
use rusqlite::Connection;

use super::migrations::apply_migrations;
use crate::core::error::StoreResult;

/// How long a writer waits on a locked database before reporting busy
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file and applies all pending migrations.
///
/// Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let path = path.as_ref();
    open_with("file", || Connection::open(path))
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> StoreResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let mut conn = match open() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        },
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        },
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        },
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
