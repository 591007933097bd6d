//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("failed to create storage directory: {0}")]
  Io(#[from] std::io::Error),
}

impl From<Error> for folio_core::StorageError {
  fn from(e: Error) -> Self { Self::Backend(Box::new(e)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
