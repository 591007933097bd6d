//! [`AdjustSession`] holds the state of an open "adjust image" dialog.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::{Adjustment, Result, Rotation, Scale, encode_jpeg_data_uri, render};

/// Holds the decoded source and the latest render while the administrator
/// adjusts scale and rotation.
///
/// Every parameter change re-renders from the original source, never from a
/// previous render, so no error accumulates across changes. Dropping the
/// session (or calling [`cancel`](Self::cancel)) discards everything.
pub struct AdjustSession {
  source:     DynamicImage,
  adjustment: Adjustment,
  preview:    RgbImage,
}

impl AdjustSession {
  /// Decode `bytes` and render with the default adjustment.
  pub fn open(bytes: &[u8]) -> Result<Self> {
    Ok(Self::from_image(image::load_from_memory(bytes)?))
  }

  pub async fn open_file(path: impl AsRef<Path>) -> Result<Self> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Self::open(&bytes)
  }

  pub fn from_image(source: DynamicImage) -> Self {
    let adjustment = Adjustment::default();
    let preview = render(&source, adjustment);
    Self { source, adjustment, preview }
  }

  pub fn adjustment(&self) -> Adjustment { self.adjustment }

  /// The bitmap for the current adjustment.
  pub fn preview(&self) -> &RgbImage { &self.preview }

  pub fn set_scale(&mut self, scale: Scale) {
    self.set_adjustment(Adjustment { scale, ..self.adjustment });
  }

  pub fn set_rotation(&mut self, rotation: Rotation) {
    self.set_adjustment(Adjustment { rotation, ..self.adjustment });
  }

  pub fn set_adjustment(&mut self, adjustment: Adjustment) {
    self.adjustment = adjustment;
    self.preview = render(&self.source, adjustment);
  }

  /// Encode the current render and end the session.
  pub fn confirm(self) -> Result<String> {
    debug!(
      width = self.preview.width(),
      height = self.preview.height(),
      "encoding adjusted image"
    );
    encode_jpeg_data_uri(&self.preview)
  }

  pub fn cancel(self) {}
}
