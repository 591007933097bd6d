//! Identifier generation for new skills, projects and experiences.

use uuid::Uuid;

/// A fresh random 128-bit identifier, rendered as 32 lowercase hex digits.
///
/// Ids already present in stored documents are arbitrary strings and are
/// never reinterpreted.
pub fn new_id() -> String { Uuid::new_v4().simple().to_string() }
