//! Dimension clamp and the affine render.
//!
//! The draw pipeline, applied to the source in this order: translate the
//! origin to the bitmap centre, rotate, scale uniformly, then draw the source
//! centred and sized to fill the target box. Rendering inverts that mapping
//! for every destination pixel centre and samples the source bilinearly.
//! Pixels the drawn image does not cover stay black.

use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use tracing::debug;

use crate::Adjustment;

/// Longest edge of a rendered image.
pub const MAX_DIMENSION: u32 = 800;

/// Clamp `(width, height)` so the longer edge is at most [`MAX_DIMENSION`],
/// preserving aspect ratio. Images already within bounds are returned as-is.
/// Fractional edges are truncated; neither edge drops below 1.
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
  if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
    return (width, height);
  }
  let max = f64::from(MAX_DIMENSION);
  let ratio = f64::from(width) / f64::from(height);
  let (w, h) = if ratio > 1.0 {
    (max, max / ratio)
  } else {
    (max * ratio, max)
  };
  ((w as u32).max(1), (h as u32).max(1))
}

/// Render `source` into a fresh bitmap of [`target_dimensions`] under
/// `adjustment`. Always starts from `source`; identical inputs give
/// bit-identical output.
pub fn render(source: &DynamicImage, adjustment: Adjustment) -> RgbImage {
  let (w, h) = target_dimensions(source.width(), source.height());
  let src = source.to_rgba8();
  let (src_w, src_h) = (src.width() as f32, src.height() as f32);

  let (sin, cos) = adjustment.rotation.sin_cos();
  let scale = adjustment.scale.get();
  let (half_w, half_h) = (w as f32 / 2.0, h as f32 / 2.0);
  let (step_x, step_y) = (src_w / w as f32, src_h / h as f32);

  debug!(
    width = w,
    height = h,
    scale,
    rotation = adjustment.rotation.degrees(),
    "rendering image"
  );

  RgbImage::from_fn(w, h, |dx, dy| {
    // Destination pixel centre, relative to the bitmap centre.
    let px = dx as f32 + 0.5 - half_w;
    let py = dy as f32 + 0.5 - half_h;

    // Undo rotation, then scale, to land in the drawn image's space.
    let ux = (px * cos + py * sin) / scale;
    let uy = (-px * sin + py * cos) / scale;

    let sx = (ux + half_w) * step_x;
    let sy = (uy + half_h) * step_y;
    if sx < 0.0 || sy < 0.0 || sx >= src_w || sy >= src_h {
      return Rgb([0, 0, 0]);
    }
    flatten(sample_bilinear(&src, sx - 0.5, sy - 0.5))
  })
}

/// Composite over black, the way a transparent canvas becomes JPEG.
fn flatten([r, g, b, a]: [f32; 4]) -> Rgb<u8> {
  let alpha = a / 255.0;
  let channel = |c: f32| (c * alpha).round().clamp(0.0, 255.0) as u8;
  Rgb([channel(r), channel(g), channel(b)])
}

fn sample_bilinear(img: &RgbaImage, x: f32, y: f32) -> [f32; 4] {
  let (w, h) = (img.width() as i64, img.height() as i64);
  let x0 = x.floor() as i64;
  let y0 = y.floor() as i64;
  let fx = x - x0 as f32;
  let fy = y - y0 as f32;

  let pixel = |sx: i64, sy: i64| -> [f32; 4] {
    let cx = sx.clamp(0, w - 1) as u32;
    let cy = sy.clamp(0, h - 1) as u32;
    img.get_pixel(cx, cy).0.map(f32::from)
  };

  let p00 = pixel(x0, y0);
  let p10 = pixel(x0 + 1, y0);
  let p01 = pixel(x0, y0 + 1);
  let p11 = pixel(x0 + 1, y0 + 1);

  let w00 = (1.0 - fx) * (1.0 - fy);
  let w10 = fx * (1.0 - fy);
  let w01 = (1.0 - fx) * fy;
  let w11 = fx * fy;

  std::array::from_fn(|i| {
    p00[i] * w00 + p10[i] * w10 + p01[i] * w01 + p11[i] * w11
  })
}
