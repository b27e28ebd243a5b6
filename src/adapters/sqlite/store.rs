//! Client store contracts over SQLite.
//!
//! # Invariants
//! - Reconciliation reads and writes inside one `BEGIN IMMEDIATE`
//!   transaction; a failed batch leaves the table untouched.
//! - Read paths reject invalid persisted state instead of masking it.
//! - A NULL status column reads as backlog.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Row, TransactionBehavior, params};

use super::open::{open_db, open_db_in_memory};
use crate::core::error::{StoreError, StoreResult};
use crate::core::models::{Client, ClientChange, ClientId, Status};
use crate::core::ports::ClientStore;
use crate::core::services::reconcile::{self, ReconcileOutcome};

const CLIENT_SELECT_SQL: &str = "SELECT id, name, description, status, priority FROM clients";

/// SQLite-backed client store
///
/// Owns one connection; each operation locks it for its duration, which
/// serializes access from concurrent request handlers.
#[derive(Debug)]
pub struct SqliteClientStore {
    conn: Mutex<Connection>,
}

impl SqliteClientStore {
    /// Open (and migrate) a database file
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// Open a fresh in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wrap an already migrated connection
    #[must_use]
    pub const fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("connection mutex poisoned".to_string()))
    }
}

impl ClientStore for SqliteClientStore {
    fn list_all(&self) -> StoreResult<Vec<Client>> {
        let conn = self.conn()?;
        select_clients(&conn, &format!("{CLIENT_SELECT_SQL} ORDER BY id ASC"), [])
    }

    fn list_by_status(&self, status: Status) -> StoreResult<Vec<Client>> {
        let conn = self.conn()?;
        // Backlog also owns rows whose status was never set
        let sql = if status == Status::Backlog {
            format!(
                "{CLIENT_SELECT_SQL} WHERE status = ?1 OR status IS NULL OR status = '' ORDER BY priority ASC, id ASC"
            )
        } else {
            format!("{CLIENT_SELECT_SQL} WHERE status = ?1 ORDER BY priority ASC, id ASC")
        };
        select_clients(&conn, &sql, [status.as_str()])
    }

    fn get(&self, id: ClientId) -> StoreResult<Option<Client>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!("{CLIENT_SELECT_SQL} WHERE id = ?1 LIMIT 1"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_client_row(row)?));
        }
        Ok(None)
    }

    fn insert(&self, client: &Client) -> StoreResult<()> {
        let conn = self.conn()?;
        let result = conn.execute(
            "INSERT INTO clients (id, name, description, status, priority)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                client.id,
                client.name.as_str(),
                client.description.as_str(),
                client.status.as_str(),
                client.priority,
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::Duplicate(client.id))
            },
            Err(err) => Err(err.into()),
        }
    }

    fn apply_changes(&self, changes: &[ClientChange]) -> StoreResult<ReconcileOutcome> {
        let mut conn = self.conn()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let stored = select_clients(&tx, &format!("{CLIENT_SELECT_SQL} ORDER BY id ASC"), [])?;
        let plan = reconcile::plan(&stored, changes);

        {
            let mut set_status = tx.prepare_cached("UPDATE clients SET status = ?1 WHERE id = ?2;")?;
            let mut set_priority =
                tx.prepare_cached("UPDATE clients SET priority = ?1 WHERE id = ?2;")?;

            for update in &plan.updates {
                if let Some(status) = update.status {
                    set_status.execute(params![status.as_str(), update.id])?;
                }
                if let Some(priority) = update.priority {
                    set_priority.execute(params![priority, update.id])?;
                }
            }
        }

        tx.commit()?;
        Ok(ReconcileOutcome::from(&plan))
    }

    fn count(&self) -> StoreResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM clients;", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| StoreError::InvalidData(format!("row count {count}")))
    }
}

fn select_clients<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> StoreResult<Vec<Client>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let mut rows = stmt.query(params)?;
    let mut clients = Vec::new();
    while let Some(row) = rows.next()? {
        clients.push(parse_client_row(row)?);
    }
    Ok(clients)
}

fn parse_client_row(row: &Row<'_>) -> StoreResult<Client> {
    let id: ClientId = row.get("id")?;

    let status_text: Option<String> = row.get("status")?;
    let status = Status::from_optional(status_text.as_deref()).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid status `{}` in clients.status for id {id}",
            status_text.as_deref().unwrap_or_default()
        ))
    })?;

    let priority_value: i64 = row.get("priority")?;
    let priority = u32::try_from(priority_value).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid priority `{priority_value}` in clients.priority for id {id}"
        ))
    })?;

    Ok(Client {
        id,
        name: row.get("name")?,
        description: row.get::<_, Option<String>>("description")?.unwrap_or_default(),
        status,
        priority,
    })
}
