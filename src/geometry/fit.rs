//! Fit calculation: scale content into a container preserving aspect ratio.
//!
//! All functions here are pure and testable without any images.

use serde::Serialize;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`. Infinite or NaN when height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when either axis is zero, negative, or not finite.
    ///
    /// [`fit`] does not check this; callers guard with it before fitting.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// Which container axis the fitted content spans completely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

/// Scaled content rectangle and its top-left offset within the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

/// A placement snapped to whole pixels for raster drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// The axis that was filled: height for portrait content, width otherwise.
    ///
    /// Follows the same branch as [`fit`], so a square image reports
    /// [`Axis::Width`].
    pub fn filled_axis(&self) -> Axis {
        match (self.start_x == 0.0, self.start_y == 0.0) {
            (true, false) => Axis::Width,
            (false, true) => Axis::Height,
            // Both offsets zero: the content exactly matches the container
            // shape, so the longer side decides like the aspect test does.
            _ if self.width >= self.height => Axis::Width,
            _ => Axis::Height,
        }
    }

    /// Round to integer pixels. Width and height are at least 1; offsets
    /// keep their sign, so an overflowing placement stays centered.
    pub fn to_pixel_rect(&self) -> PixelRect {
        PixelRect {
            x: self.start_x.round() as i64,
            y: self.start_y.round() as i64,
            width: self.width.round().max(1.0) as u32,
            height: self.height.round().max(1.0) as u32,
        }
    }
}

/// Fit `content` into `container`, preserving aspect ratio and centering it.
///
/// Portrait content (aspect ratio below 1) fills the container height and is
/// centered horizontally. Landscape and square content fills the width and is
/// centered vertically.
///
/// No validation happens here: a zero content height yields NaN/infinite
/// fields. Check [`Dimensions::is_degenerate`] first.
///
/// # Examples
/// ```
/// use memeframe::geometry::{Dimensions, fit};
///
/// // 2:1 landscape into a 500x500 canvas → letterboxed 500x250 at y=125
/// let p = fit(Dimensions::new(500.0, 500.0), Dimensions::new(1000.0, 500.0));
/// assert_eq!((p.width, p.height, p.start_x, p.start_y), (500.0, 250.0, 0.0, 125.0));
/// ```
pub fn fit(container: Dimensions, content: Dimensions) -> Placement {
    let aspect_ratio = content.aspect_ratio();

    if aspect_ratio < 1.0 {
        // Portrait: full height, centered horizontally
        let height = container.height;
        let width = container.height * aspect_ratio;
        Placement {
            width,
            height,
            start_x: (container.width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        // Landscape or square: full width, centered vertically
        let width = container.width;
        let height = container.width / aspect_ratio;
        Placement {
            width,
            height,
            start_x: 0.0,
            start_y: (container.height - height) / 2.0,
        }
    }
}
