//! Site-wide presentation settings.

use serde::{Deserialize, Serialize};

use crate::model::Extra;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
  #[default]
  Sans,
  Serif,
  Mono,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroLayout {
  #[default]
  Split,
  Centered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppTheme {
  /// CSS colour string, e.g. `#3b82f6`.
  pub primary_color: String,
  pub font_family:   FontFamily,
  pub hero_layout:   HeroLayout,
  pub dark_mode:     bool,
  #[serde(flatten)]
  pub extra:         Extra,
}

impl Default for AppTheme {
  fn default() -> Self {
    Self {
      primary_color: "#3b82f6".to_owned(),
      font_family:   FontFamily::Sans,
      hero_layout:   HeroLayout::Split,
      dark_mode:     true,
      extra:         Extra::new(),
    }
  }
}

impl std::str::FromStr for FontFamily {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "sans" => Ok(Self::Sans),
      "serif" => Ok(Self::Serif),
      "mono" => Ok(Self::Mono),
      other => Err(format!("unknown font family: {other:?}")),
    }
  }
}

impl std::str::FromStr for HeroLayout {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "split" => Ok(Self::Split),
      "centered" => Ok(Self::Centered),
      other => Err(format!("unknown hero layout: {other:?}")),
    }
  }
}
