//! Image normalizer for Folio.
//!
//! Turns a user-supplied raster image, under interactive scale and rotation
//! adjustments, into a bounded-size JPEG `data:` URI the content store keeps
//! as an opaque string. Pure and synchronous apart from reading the source
//! file.
//!
//! # Quick start
//!
//! ```no_run
//! use folio_image::{Adjustment, Rotation, normalize};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let adjustment = Adjustment { rotation: Rotation::Deg90, ..Adjustment::default() };
//! let out = normalize(&bytes, adjustment).unwrap();
//! println!("{}x{}, {} bytes", out.width, out.height, out.payload.len());
//! ```

mod adjust;
mod encode;
pub mod error;
mod render;
mod session;

pub use adjust::{Adjustment, Rotation, Scale};
pub use encode::{DATA_URI_PREFIX, JPEG_QUALITY, encode_jpeg_data_uri};
pub use error::{ImageError, Result};
pub use render::{MAX_DIMENSION, render, target_dimensions};
pub use session::AdjustSession;

/// A rendered and encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
  pub width:   u32,
  pub height:  u32,
  /// `data:image/jpeg;base64,…`
  pub payload: String,
}

/// Decode `bytes`, render with `adjustment` and encode, in one call.
pub fn normalize(bytes: &[u8], adjustment: Adjustment) -> Result<Normalized> {
  let source = image::load_from_memory(bytes)?;
  let rendered = render(&source, adjustment);
  Ok(Normalized {
    width:   rendered.width(),
    height:  rendered.height(),
    payload: encode_jpeg_data_uri(&rendered)?,
  })
}
