//! Interactive adjustment parameters.

use crate::{ImageError, Result};

/// Quarter-turn clockwise rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
  #[default]
  Deg0,
  Deg90,
  Deg180,
  Deg270,
}

impl Rotation {
  pub fn degrees(self) -> u16 {
    match self {
      Self::Deg0 => 0,
      Self::Deg90 => 90,
      Self::Deg180 => 180,
      Self::Deg270 => 270,
    }
  }

  /// Exact `(sin, cos)` of the angle.
  pub(crate) fn sin_cos(self) -> (f32, f32) {
    match self {
      Self::Deg0 => (0.0, 1.0),
      Self::Deg90 => (1.0, 0.0),
      Self::Deg180 => (0.0, -1.0),
      Self::Deg270 => (-1.0, 0.0),
    }
  }
}

/// `360` is accepted as a full turn and maps to [`Rotation::Deg0`].
impl TryFrom<u16> for Rotation {
  type Error = ImageError;

  fn try_from(degrees: u16) -> Result<Self> {
    match degrees {
      0 | 360 => Ok(Self::Deg0),
      90 => Ok(Self::Deg90),
      180 => Ok(Self::Deg180),
      270 => Ok(Self::Deg270),
      other => Err(ImageError::InvalidRotation(other)),
    }
  }
}

/// Uniform zoom factor in `[Scale::MIN, Scale::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
  pub const MIN: f32 = 0.5;
  pub const MAX: f32 = 2.0;

  pub fn new(factor: f32) -> Result<Self> {
    if !factor.is_finite() || !(Self::MIN..=Self::MAX).contains(&factor) {
      return Err(ImageError::ScaleOutOfRange(factor));
    }
    Ok(Self(factor))
  }

  pub fn get(self) -> f32 { self.0 }
}

impl Default for Scale {
  fn default() -> Self { Self(1.0) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
  pub scale:    Scale,
  pub rotation: Rotation,
}
