//! SQLite-backed credential storage.

use anyhow::{bail, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

use super::store::CredentialStore;

const SCHEMA_VERSION: i64 = 1;

const CREATE_KV_TABLE: &str = "CREATE TABLE kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (cast(strftime('%s','now') as int))
);";

/// Durable key-value store backed by a single SQLite file.
pub struct SqliteCredentialStore {
    connection: Mutex<Connection>,
}

impl SqliteCredentialStore {
    /// Opens (or creates) the store at the given path.
    /// Fails if the file exists with an unexpected schema version.
    pub fn new(path: &Path) -> Result<Self> {
        let connection = Connection::open(path)?;
        Self::init_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Opens an in-memory store, useful for tests and ephemeral sessions.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        Self::init_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn init_schema(connection: &Connection) -> Result<()> {
        let version: i64 =
            connection.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        match version {
            0 => {
                connection.execute(CREATE_KV_TABLE, params![])?;
                connection.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
                Ok(())
            }
            SCHEMA_VERSION => Ok(()),
            other => bail!(
                "Credential store has schema version {}, expected {}",
                other,
                SCHEMA_VERSION
            ),
        }
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let connection = self.connection.lock().unwrap();
        let value = connection
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = cast(strftime('%s','now') as int)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let connection = self.connection.lock().unwrap();
        connection.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
