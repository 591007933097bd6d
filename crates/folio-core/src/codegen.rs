//! Promotes runtime edits to the build-time default by rendering the source
//! of the crate's snapshot module with the given data embedded.
//!
//! The output is meant to be pasted over `folio-core/src/snapshot.rs` by
//! hand; nothing applies it automatically.

use crate::{Result, model::AppData};

const HEADER: &str = "\
//! Built-in default content.
//!
//! Generated by `folio code-export`. To promote edits made at runtime, paste
//! that command's output over this file. Changing `version` makes every
//! install discard its stored copy on next start.

/// The default `AppData` document, used when storage is empty or stale.
";

/// Render a complete snapshot module embedding `data` as pretty JSON.
pub fn code_export(data: &AppData) -> Result<String> {
  let json = serde_json::to_string_pretty(data)?;
  let hashes = "#".repeat(raw_string_hashes(&json));
  Ok(format!(
    "{HEADER}pub(crate) const SNAPSHOT_JSON: &str = r{hashes}\"\n{json}\n\"{hashes};\n"
  ))
}

/// Number of `#` needed so that no `"#…` run inside `text` closes the raw
/// string literal early.
fn raw_string_hashes(text: &str) -> usize {
  let mut longest = 0;
  let mut run: Option<usize> = None;
  for c in text.chars() {
    run = match (c, run) {
      ('"', _) => Some(0),
      ('#', Some(n)) => Some(n + 1),
      _ => None,
    };
    if let Some(n) = run {
      longest = longest.max(n);
    }
  }
  longest + 1
}
