//! Drawing surface trait and shared types.
//!
//! The [`Surface`] trait is the draw capability the layout engine's output
//! is handed to: fill the canvas, draw the fitted image, stroke and fill
//! each caption line.
//!
//! The production implementation is
//! [`SvgSurface`](super::svg_surface::SvgSurface), which rasterizes the
//! image layer and writes captions as SVG text.

use crate::caption::LineCommand;
use crate::config::{ConfigError, MemeConfig, parse_hex_color};
use crate::geometry::Placement;
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Paint settings for one render: canvas fill plus caption font and colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: [u8; 3],
    pub font_family: String,
    pub font_size: f64,
    pub fill: [u8; 3],
    pub stroke: [u8; 3],
    pub stroke_width: f64,
}

impl Style {
    pub fn from_config(config: &MemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            background: parse_hex_color(&config.canvas.background)?,
            font_family: config.font.family.clone(),
            font_size: config.font.size,
            fill: parse_hex_color(&config.caption.fill)?,
            stroke: parse_hex_color(&config.caption.stroke)?,
            stroke_width: config.caption.stroke_width,
        })
    }
}

/// Format RGB bytes as `#rrggbb`.
pub fn hex_color([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Something that can draw a meme: a background, one image, caption lines.
pub trait Surface {
    /// Cover the whole canvas with a solid colour.
    fn fill_background(&mut self, color: [u8; 3]) -> Result<(), RenderError>;

    /// Draw `image` scaled into `placement`.
    fn draw_image(&mut self, image: &RgbaImage, placement: &Placement) -> Result<(), RenderError>;

    /// Stroke, then fill, one caption line at its baseline.
    fn draw_caption_line(&mut self, line: &LineCommand, style: &Style) -> Result<(), RenderError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Surface that records draw calls without executing them.
    #[derive(Default)]
    pub struct MockSurface {
        pub operations: Vec<RecordedOp>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Background([u8; 3]),
        Image {
            source: (u32, u32),
            placement: Placement,
        },
        Line {
            text: String,
            x: f64,
            y: f64,
        },
    }

    impl Surface for MockSurface {
        fn fill_background(&mut self, color: [u8; 3]) -> Result<(), RenderError> {
            self.operations.push(RecordedOp::Background(color));
            Ok(())
        }

        fn draw_image(
            &mut self,
            image: &RgbaImage,
            placement: &Placement,
        ) -> Result<(), RenderError> {
            self.operations.push(RecordedOp::Image {
                source: image.dimensions(),
                placement: *placement,
            });
            Ok(())
        }

        fn draw_caption_line(
            &mut self,
            line: &LineCommand,
            _style: &Style,
        ) -> Result<(), RenderError> {
            self.operations.push(RecordedOp::Line {
                text: line.text.clone(),
                x: line.x,
                y: line.y,
            });
            Ok(())
        }
    }

    #[test]
    fn style_from_default_config() {
        let style = Style::from_config(&MemeConfig::default()).unwrap();
        assert_eq!(style.background, [0, 0, 0]);
        assert_eq!(style.fill, [255, 255, 255]);
        assert_eq!(style.font_family, "Impact");
        assert_eq!(style.font_size, 40.0);
    }

    #[test]
    fn hex_color_formats_lowercase() {
        assert_eq!(hex_color([255, 128, 0]), "#ff8000");
        assert_eq!(hex_color([0, 0, 0]), "#000000");
    }

    #[test]
    fn mock_records_in_order() {
        let mut surface = MockSurface::default();
        let style = Style::from_config(&MemeConfig::default()).unwrap();
        surface.fill_background([1, 2, 3]).unwrap();
        surface
            .draw_caption_line(
                &LineCommand {
                    text: "hi".into(),
                    x: 1.0,
                    y: 2.0,
                },
                &style,
            )
            .unwrap();
        assert_eq!(
            surface.operations,
            vec![
                RecordedOp::Background([1, 2, 3]),
                RecordedOp::Line {
                    text: "hi".into(),
                    x: 1.0,
                    y: 2.0,
                },
            ]
        );
    }
}
