//! SVG drawing surface.
//!
//! The image layer (background fill plus fitted image) is composited into a
//! raster and embedded as a base64 PNG `<image>`. Each caption line becomes a
//! `<text>` element positioned at its baseline, with `paint-order="stroke"`
//! so the outline sits under the fill like a canvas `strokeText` followed by
//! `fillText`.

use super::backend::{RenderError, Style, Surface, hex_color};
use super::raster;
use crate::caption::LineCommand;
use crate::geometry::Placement;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;
use svg::Document;
use svg::node::element::{Image, Text};

pub struct SvgSurface {
    width: u32,
    height: u32,
    raster: RgbaImage,
    lines: Vec<Text>,
}

impl SvgSurface {
    /// An empty, transparent surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            raster: RgbaImage::new(width, height),
            lines: Vec::new(),
        }
    }

    /// The composited image layer drawn so far.
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Build the SVG document: image layer first, then captions in draw order.
    pub fn finish(&self) -> Result<Document, RenderError> {
        let png = raster::encode_png(&self.raster)?;
        let href = format!("data:image/png;base64,{}", STANDARD.encode(png));

        let mut doc = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .add(
                Image::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("href", href),
            );
        for line in &self.lines {
            doc = doc.add(line.clone());
        }
        Ok(doc)
    }

    /// [`finish`](Self::finish) rendered to a string.
    pub fn to_svg_string(&self) -> Result<String, RenderError> {
        Ok(self.finish()?.to_string())
    }
}

impl Surface for SvgSurface {
    fn fill_background(&mut self, color: [u8; 3]) -> Result<(), RenderError> {
        self.raster = raster::solid_canvas(self.width, self.height, color);
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, placement: &Placement) -> Result<(), RenderError> {
        raster::draw_fitted(&mut self.raster, image, placement);
        Ok(())
    }

    fn draw_caption_line(&mut self, line: &LineCommand, style: &Style) -> Result<(), RenderError> {
        let text = Text::new(line.text.as_str())
            .set("x", line.x)
            .set("y", line.y)
            .set("font-family", style.font_family.as_str())
            .set("font-size", style.font_size)
            .set("fill", hex_color(style.fill))
            .set("stroke", hex_color(style.stroke))
            .set("stroke-width", style.stroke_width)
            .set("paint-order", "stroke")
            .set("xml:space", "preserve");
        self.lines.push(text);
        Ok(())
    }
}
