//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage error: {0}")]
  Storage(#[from] StorageError),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// A user-facing validation message, e.g. a required field left blank.
  #[error("{0}")]
  Validation(String),

  #[error("built-in snapshot is invalid: {0}")]
  Snapshot(#[source] serde_json::Error),
}

/// Failures of a [`DurableStorage`](crate::storage::DurableStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("quota exceeded: {needed} bytes requested, {quota} allowed")]
  QuotaExceeded { needed: usize, quota: usize },

  #[error("storage backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why an import was rejected. The `Display` text is the message shown to the
/// administrator; state is never touched when one of these is returned.
#[derive(Debug, Error)]
pub enum ImportError {
  #[error("Failed to read import file: {0}")]
  Read(#[from] std::io::Error),

  #[error("Failed to parse JSON file.")]
  Parse(#[source] serde_json::Error),

  #[error("Invalid data format: Missing profile or skills.")]
  MissingFields,

  #[error("Invalid data format: {0}")]
  Shape(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
