//! Image placement math: pure functions, no I/O.
//!
//! | Operation | Function |
//! |---|---|
//! | **Fit** content into a container, centered | [`fit`] |
//! | **Guard** against zero/negative/NaN sizes | [`Dimensions::is_degenerate`] |
//! | **Snap** a placement to whole pixels | [`Placement::to_pixel_rect`] |
//!
//! Everything here works in `f64` pixels. Callers that draw into raster
//! buffers convert with [`Placement::to_pixel_rect`] at the last moment.

mod fit;

pub use fit::{Axis, Dimensions, PixelRect, Placement, fit};
