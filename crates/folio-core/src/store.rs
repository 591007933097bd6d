//! [`ContentStore`] owns the site's [`AppData`].
//!
//! The store holds the active document in memory and mirrors it to a
//! [`DurableStorage`] backend after every change. It is an explicit value
//! handed to whoever needs it; there is no global instance.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::{error, info, warn};

use crate::{
  Error, ImportError, Result,
  model::AppData,
  patch::{DataPatch, ThemePatch},
  snapshot::SNAPSHOT_JSON,
  storage::DurableStorage,
  transfer::{self, ExportFile},
};

/// Key under which the document is persisted.
pub const STORAGE_KEY: &str = "portfolio_data_v1";

/// Sticky message surfaced after a failed persist.
pub const PERSIST_ERROR_MESSAGE: &str =
  "Failed to save changes to local storage. Quota might be exceeded.";

const RESET_PROMPT: &str = "Are you sure you want to reset all data to the \
                            built-in defaults? Your manual edits will be lost.";

/// Parse the built-in default snapshot.
pub fn default_data() -> Result<AppData> {
  serde_json::from_str(SNAPSHOT_JSON).map_err(Error::Snapshot)
}

// ─── Confirmation ────────────────────────────────────────────────────────────

/// Asks the administrator to confirm a destructive action.
pub trait Confirm {
  fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
  fn confirm(&self, prompt: &str) -> bool { self(prompt) }
}

/// A fixed answer, e.g. from a `--yes` flag.
impl Confirm for bool {
  fn confirm(&self, _prompt: &str) -> bool { *self }
}

// ─── Store ───────────────────────────────────────────────────────────────────

pub struct ContentStore<S> {
  storage:       S,
  data:          AppData,
  defaults:      AppData,
  storage_error: Option<String>,
}

impl<S: DurableStorage> ContentStore<S> {
  /// Load the active document from `storage`, falling back to the built-in
  /// snapshot.
  pub fn open(storage: S) -> Result<Self> {
    Ok(Self::with_defaults(storage, default_data()?))
  }

  /// Load the active document from `storage` against a caller-supplied
  /// default snapshot.
  ///
  /// A stored document is used only if it parses and its `version` equals
  /// the defaults' `version`. On a mismatch the stored copy is discarded and
  /// overwritten with the defaults. Read and parse failures are logged and
  /// fall back to the defaults.
  pub fn with_defaults(mut storage: S, defaults: AppData) -> Self {
    let data = load(&mut storage, &defaults);
    let mut store = Self { storage, data, defaults, storage_error: None };
    store.persist();
    store
  }

  pub fn data(&self) -> &AppData { &self.data }

  pub fn defaults(&self) -> &AppData { &self.defaults }

  pub fn storage(&self) -> &S { &self.storage }

  pub fn into_storage(self) -> S { self.storage }

  /// The message from the last failed persist, cleared by the next
  /// successful one.
  pub fn storage_error(&self) -> Option<&str> { self.storage_error.as_deref() }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Replace every top-level field set in `patch`. Nested values are
  /// replaced whole, never merged.
  pub fn update_data(&mut self, patch: DataPatch) {
    patch.apply(&mut self.data);
    self.persist();
  }

  /// Replace every theme field set in `patch`.
  pub fn update_theme(&mut self, patch: ThemePatch) {
    patch.apply(&mut self.data.theme);
    self.persist();
  }

  /// Replace the whole document with the defaults, if `confirm` agrees.
  /// Returns whether the reset happened.
  pub fn reset_data(&mut self, confirm: &impl Confirm) -> bool {
    if !confirm.confirm(RESET_PROMPT) {
      return false;
    }
    info!(version = %self.defaults.version, "resetting content to built-in defaults");
    self.data = self.defaults.clone();
    self.persist();
    true
  }

  // ── Import / export ───────────────────────────────────────────────────

  /// Pretty-printed export named after today's UTC date.
  pub fn export_data(&self) -> Result<ExportFile> {
    self.export_data_on(Utc::now().date_naive())
  }

  pub fn export_data_on(&self, date: NaiveDate) -> Result<ExportFile> {
    ExportFile::new(&self.data, date)
  }

  /// Replace the whole document with the one in `text`. On any error the
  /// current document is left untouched.
  pub fn import_str(&mut self, text: &str) -> Result<(), ImportError> {
    let data = transfer::parse_import(text).inspect_err(|e| {
      warn!(error = %e, "import rejected");
    })?;
    info!(version = %data.version, skills = data.skills.len(), "import applied");
    self.data = data;
    self.persist();
    Ok(())
  }

  /// Read `path` in full, then behave as [`import_str`](Self::import_str).
  pub async fn import_file(
    &mut self,
    path: impl AsRef<Path>,
  ) -> Result<(), ImportError> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    self.import_str(&text)
  }

  // ── Persistence ───────────────────────────────────────────────────────

  fn persist(&mut self) {
    let written = serde_json::to_string(&self.data)
      .map_err(Error::from)
      .and_then(|json| {
        self.storage.set(STORAGE_KEY, &json).map_err(Error::from)
      });
    match written {
      Ok(()) => self.storage_error = None,
      Err(e) => {
        warn!(error = %e, "failed to persist content");
        self.storage_error = Some(PERSIST_ERROR_MESSAGE.to_owned());
      }
    }
  }
}

fn load<S: DurableStorage>(storage: &mut S, defaults: &AppData) -> AppData {
  let raw = match storage.get(STORAGE_KEY) {
    Ok(Some(raw)) => raw,
    Ok(None) => return defaults.clone(),
    Err(e) => {
      error!(error = %e, "failed to read stored content");
      return defaults.clone();
    }
  };

  let stored: AppData = match serde_json::from_str(&raw) {
    Ok(stored) => stored,
    Err(e) => {
      error!(error = %e, "failed to parse stored content");
      return defaults.clone();
    }
  };

  if stored.version != defaults.version {
    info!(
      stored = %stored.version,
      built_in = %defaults.version,
      "version mismatch; replacing stored content with built-in defaults"
    );
    match serde_json::to_string(defaults) {
      Ok(json) => {
        if let Err(e) = storage.set(STORAGE_KEY, &json) {
          warn!(error = %e, "failed to overwrite stale content");
        }
      }
      Err(e) => warn!(error = %e, "failed to serialise defaults"),
    }
    return defaults.clone();
  }

  stored
}
