//! Core types and the content store for the Folio portfolio site.
//!
//! No database or image dependencies live here. Storage backends implement
//! [`storage::DurableStorage`]; the image normalizer produces payloads the
//! store treats as opaque strings.

pub mod codegen;
pub mod editing;
pub mod error;
pub mod id;
pub mod model;
pub mod patch;
mod snapshot;
pub mod storage;
pub mod store;
pub mod theme;
pub mod transfer;

pub use error::{Error, ImportError, Result, StorageError};
pub use store::{Confirm, ContentStore, STORAGE_KEY, default_data};

#[cfg(test)]
mod tests;
