//! Checklist state storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide a stable read/write API over the persisted state value.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The state lives under the single fixed key [`STATE_STORAGE_KEY`].
//! - Writes always replace the whole stored value.

use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key for the serialized checklist state.
pub const STATE_STORAGE_KEY: &str = "resilience_v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for state read/write operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage capability injected into the checklist store.
///
/// Kept deliberately narrow (get/set of one opaque string) so tests can
/// swap the backend without touching store logic.
pub trait StateRepository {
    /// Reads the raw persisted state, `None` when nothing was saved yet.
    fn read_raw(&self) -> RepoResult<Option<String>>;
    /// Replaces the persisted state wholesale.
    fn write_raw(&self, raw: &str) -> RepoResult<()>;
}

/// SQLite-backed state storage over the `kv_store` table.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn read_raw(&self) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;

        let mut rows = stmt.query(params![STATE_STORAGE_KEY])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write_raw(&self, raw: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STATE_STORAGE_KEY, raw],
        )?;

        Ok(())
    }
}
