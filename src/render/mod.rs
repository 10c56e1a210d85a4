//! Drawing: turning a laid-out [`Frame`] into pixels and SVG.
//!
//! The module is split into:
//! - **Backend**: [`Surface`] trait, [`Style`], [`RenderError`]
//! - **Raster**: decode, fill, fit-and-overlay, PNG encode (`image` crate)
//! - **SVG surface**: [`SvgSurface`], the production [`Surface`]
//!
//! [`render_meme`] drives any surface in the fixed order the canvas needs:
//! background, image, then every caption line.

pub mod backend;
pub mod raster;
pub mod svg_surface;

pub use backend::{RenderError, Style, Surface, hex_color};
pub use svg_surface::SvgSurface;

use crate::controller::Frame;
use image::RgbaImage;
use log::debug;

/// Draw a complete meme onto `surface`.
pub fn render_meme<S: Surface + ?Sized>(
    surface: &mut S,
    image: &RgbaImage,
    frame: &Frame,
    style: &Style,
) -> Result<(), RenderError> {
    surface.fill_background(style.background)?;
    surface.draw_image(image, &frame.placement)?;
    for line in &frame.lines {
        surface.draw_caption_line(line, style)?;
    }
    debug!("rendered frame with {} caption lines", frame.lines.len());
    Ok(())
}
