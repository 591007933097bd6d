//! Error types for the image normalizer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
  #[error("image decode/encode error: {0}")]
  Image(#[from] image::ImageError),

  #[error("rotation must be a multiple of 90 degrees, got {0}")]
  InvalidRotation(u16),

  #[error("scale must be between 0.5 and 2.0, got {0}")]
  ScaleOutOfRange(f32),

  #[error("failed to read image: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = ImageError> = std::result::Result<T, E>;
