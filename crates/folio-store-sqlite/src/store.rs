//! [`SqliteStorage`]: the SQLite implementation of [`DurableStorage`].

use std::path::Path;

use chrono::{DateTime, Utc};
use folio_core::{StorageError, storage::DurableStorage};
use rusqlite::{Connection, OptionalExtension as _};
use tracing::debug;

use crate::{Result, schema::SCHEMA};

/// Durable key/value storage backed by a single SQLite file.
pub struct SqliteStorage {
  conn: Connection,
}

impl SqliteStorage {
  /// Open (or create) the database at `path`, creating parent directories
  /// as needed, and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    debug!(path = %path.display(), "opening sqlite storage");
    Self::init(Connection::open(path)?)
  }

  /// Open an in-memory database for tests.
  pub fn open_in_memory() -> Result<Self> {
    Self::init(Connection::open_in_memory()?)
  }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn })
  }

  /// When `key` was last written, or `None` if it is absent.
  pub fn updated_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = self
      .conn
      .query_row(
        "SELECT updated_at FROM kv WHERE key = ?1",
        rusqlite::params![key],
        |row| row.get(0),
      )
      .optional()?;

    Ok(
      raw
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc)),
    )
  }

  fn get_value(&self, key: &str) -> Result<Option<String>> {
    Ok(
      self
        .conn
        .query_row(
          "SELECT value FROM kv WHERE key = ?1",
          rusqlite::params![key],
          |row| row.get(0),
        )
        .optional()?,
    )
  }

  fn put_value(&self, key: &str, value: &str) -> Result<()> {
    self.conn.execute(
      "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
       ON CONFLICT (key) DO UPDATE SET
         value      = excluded.value,
         updated_at = excluded.updated_at",
      rusqlite::params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
  }

  fn delete_value(&self, key: &str) -> Result<()> {
    self
      .conn
      .execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])?;
    Ok(())
  }
}

// ─── DurableStorage impl ─────────────────────────────────────────────────────

impl DurableStorage for SqliteStorage {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.get_value(key)?)
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    Ok(self.put_value(key, value)?)
  }

  fn remove(&mut self, key: &str) -> Result<(), StorageError> {
    Ok(self.delete_value(key)?)
  }
}
