//! Raster compositing with the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode uploaded bytes | `image::load_from_memory` |
//! | Fill canvas | `ImageBuffer::from_pixel` |
//! | Scale into placement | `image::imageops::resize` with `Lanczos3` |
//! | Overlay | `image::imageops::overlay` |
//! | Encode | `ImageBuffer::write_to` (PNG) |

use super::backend::RenderError;
use crate::geometry::Placement;
use image::imageops::FilterType;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Decode image bytes in any compiled-in format.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// A canvas of `width`×`height` filled with an opaque colour.
pub fn solid_canvas(width: u32, height: u32, [r, g, b]: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
}

/// Scale `image` to the placement size and draw it at the placement origin.
///
/// Parts falling outside `canvas` are clipped by `overlay`.
pub fn draw_fitted(canvas: &mut RgbaImage, image: &RgbaImage, placement: &Placement) {
    let rect = placement.to_pixel_rect();
    let scaled = image::imageops::resize(image, rect.width, rect.height, FilterType::Lanczos3);
    image::imageops::overlay(canvas, &scaled, rect.x, rect.y);
}

/// Encode to PNG in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}
