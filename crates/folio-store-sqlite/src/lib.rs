//! SQLite backend for Folio's durable storage.
//!
//! A single `kv` table stands in for browser-local storage: one text value
//! per key, rewritten in full on every persist.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStorage;
