//! The `DurableStorage` trait and an in-memory implementation.
//!
//! Storage is a flat string key/value map, the shape of browser-local
//! storage. Backends (e.g. `folio-store-sqlite`) implement the trait; the
//! [`ContentStore`](crate::ContentStore) depends only on this abstraction.

use std::collections::BTreeMap;

use crate::StorageError;

/// A synchronous string key/value store.
///
/// Calls are expected to be fast enough to run inline after every mutation.
pub trait DurableStorage {
  /// Return the value stored under `key`, or `None` if absent.
  fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

  /// Store `value` under `key`, replacing any previous value.
  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

  /// Remove `key`. Removing an absent key succeeds.
  fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// ─── In-memory backend ───────────────────────────────────────────────────────

/// A `BTreeMap`-backed store with an optional byte quota.
///
/// The quota counts the UTF-8 length of every key and value, so a `set` that
/// would push the total over it fails with [`StorageError::QuotaExceeded`]
/// and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  entries: BTreeMap<String, String>,
  quota:   Option<usize>,
}

impl MemoryStorage {
  pub fn new() -> Self { Self::default() }

  pub fn with_quota(quota: usize) -> Self {
    Self { entries: BTreeMap::new(), quota: Some(quota) }
  }

  pub fn set_quota(&mut self, quota: Option<usize>) { self.quota = quota; }

  /// Total bytes currently held.
  pub fn used(&self) -> usize {
    self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
  }
}

impl DurableStorage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    if let Some(quota) = self.quota {
      let existing = self.entries.get(key).map_or(0, |v| key.len() + v.len());
      let needed = self.used() - existing + key.len() + value.len();
      if needed > quota {
        return Err(StorageError::QuotaExceeded { needed, quota });
      }
    }
    self.entries.insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove(&mut self, key: &str) -> Result<(), StorageError> {
    self.entries.remove(key);
    Ok(())
  }
}
