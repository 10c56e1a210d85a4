//! Meme editor state and commands.
//!
//! The controller owns everything that changes between user actions: the
//! currently selected image and the caption form. The geometry and caption
//! modules stay stateless; the controller feeds them plain values.
//!
//! ```text
//! on_image_selected(bytes)        → decode, fit, clear form
//! on_generate_requested(top, bot) → layout captions → Frame
//! on_clear()                      → drop image and form
//! ```

use crate::caption::{LayoutError, LineCommand, TextMeasure, layout};
use crate::config::MemeConfig;
use crate::geometry::{Dimensions, Placement, fit};
use crate::render::{RenderError, raster};
use image::RgbaImage;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("no image selected")]
    NoImage,
    #[error("image has unusable dimensions {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },
    #[error("could not decode image: {0}")]
    Decode(#[from] RenderError),
    #[error("caption layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// Everything a surface needs to draw one meme, minus the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub canvas: Dimensions,
    pub placement: Placement,
    pub lines: Vec<LineCommand>,
}

/// The caption text last submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionForm {
    pub top: String,
    pub bottom: String,
}

struct LoadedImage {
    pixels: RgbaImage,
    placement: Placement,
}

pub struct MemeController {
    canvas: Dimensions,
    current: Option<LoadedImage>,
    form: CaptionForm,
}

impl MemeController {
    pub fn new(config: &MemeConfig) -> Self {
        Self {
            canvas: config.canvas.dimensions(),
            current: None,
            form: CaptionForm::default(),
        }
    }

    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Pixels of the selected image, unscaled.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.current.as_ref().map(|loaded| &loaded.pixels)
    }

    pub fn captions(&self) -> &CaptionForm {
        &self.form
    }

    /// A new image was chosen: decode it, fit it to the canvas, and clear
    /// any captions entered for the previous one.
    pub fn on_image_selected(&mut self, bytes: &[u8]) -> Result<Placement, ControllerError> {
        let pixels = raster::decode(bytes)?;
        let (width, height) = pixels.dimensions();
        let content = Dimensions::from((width, height));
        if content.is_degenerate() {
            return Err(ControllerError::DegenerateImage { width, height });
        }

        let placement = fit(self.canvas, content);
        info!(
            "loaded {width}x{height} image → {:.1}x{:.1} at ({:.1}, {:.1})",
            placement.width, placement.height, placement.start_x, placement.start_y
        );

        self.form = CaptionForm::default();
        self.current = Some(LoadedImage { pixels, placement });
        Ok(placement)
    }

    /// Lay out `top` and `bottom` over the selected image.
    pub fn on_generate_requested<M: TextMeasure + ?Sized>(
        &mut self,
        top: &str,
        bottom: &str,
        measure: &M,
    ) -> Result<Frame, ControllerError> {
        let placement = self
            .current
            .as_ref()
            .map(|loaded| loaded.placement)
            .ok_or(ControllerError::NoImage)?;

        let lines = layout(Some(top), Some(bottom), self.canvas, measure)?;
        self.form = CaptionForm {
            top: top.to_string(),
            bottom: bottom.to_string(),
        };
        info!("generated frame with {} caption lines", lines.len());

        Ok(Frame {
            canvas: self.canvas,
            placement,
            lines,
        })
    }

    /// Reset the form and forget the selected image.
    pub fn on_clear(&mut self) {
        self.current = None;
        self.form = CaptionForm::default();
    }
}
