//! Runtime configuration, layered from `folio.toml` and `FOLIO_*` variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite file holding the persisted document. A leading `~/` is expanded.
  #[serde(default = "default_storage_path")]
  pub storage_path: PathBuf,
  /// Where `export` writes when `--dir` is not given.
  #[serde(default = "default_export_dir")]
  pub export_dir:   PathBuf,
}

fn default_storage_path() -> PathBuf { PathBuf::from("~/.local/share/folio/folio.db") }

fn default_export_dir() -> PathBuf { PathBuf::from(".") }

impl Settings {
  /// Read `path` (if it exists) and overlay the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()
      .context("failed to read config file")?;

    let mut settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise Settings")?;
    settings.storage_path = expand_tilde(&settings.storage_path);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
