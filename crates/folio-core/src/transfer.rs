//! JSON export files and import validation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;

use crate::{ImportError, Result, model::AppData};

pub const EXPORT_MIME_TYPE: &str = "application/json";

/// A pretty-printed export of the whole document, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
  /// `portfolio-data-<YYYY-MM-DD>.json`
  pub file_name: String,
  pub mime_type: &'static str,
  pub contents:  String,
}

impl ExportFile {
  pub fn new(data: &AppData, date: NaiveDate) -> Result<Self> {
    Ok(Self {
      file_name: format!("portfolio-data-{}.json", date.format("%Y-%m-%d")),
      mime_type: EXPORT_MIME_TYPE,
      contents:  serde_json::to_string_pretty(data)?,
    })
  }

  /// Write the export into `dir` under its file name and return the path.
  pub async fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = dir.as_ref().join(&self.file_name);
    tokio::fs::write(&path, &self.contents).await?;
    Ok(path)
  }
}

/// Validate an import document.
///
/// The only structural requirement is a truthy `profile` and `skills` at the
/// top level; everything else is whatever the document's shape yields.
pub fn parse_import(text: &str) -> Result<AppData, ImportError> {
  let value: Value = serde_json::from_str(text).map_err(ImportError::Parse)?;
  if !is_truthy(value.get("profile")) || !is_truthy(value.get("skills")) {
    return Err(ImportError::MissingFields);
  }
  serde_json::from_value(value).map_err(ImportError::Shape)
}

/// JavaScript truthiness; empty arrays and objects count as present.
fn is_truthy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => false,
    Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
    Some(Value::String(s)) => !s.is_empty(),
    Some(_) => true,
  }
}
