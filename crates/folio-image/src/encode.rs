//! JPEG `data:` URI encoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{RgbImage, codecs::jpeg::JpegEncoder};

use crate::Result;

/// Lossy quality factor, out of 100.
pub const JPEG_QUALITY: u8 = 80;

pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode `image` as JPEG at [`JPEG_QUALITY`] and wrap it in a `data:` URI.
pub fn encode_jpeg_data_uri(image: &RgbImage) -> Result<String> {
  let mut jpeg = Vec::new();
  JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(image)?;
  Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(&jpeg)))
}
