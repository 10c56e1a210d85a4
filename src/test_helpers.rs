//! Shared test utilities for the memeframe test suite.
//!
//! Provides deterministic measurement closures, a synthetic image encoder,
//! and small extractors over layout output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let lines = layout_top("aaaa bbbb cccc", 100.0, &char_measure(10.0)).unwrap();
//! assert_eq!(texts(&lines), vec!["aaaa bbbb", "cccc"]);
//! ```

use crate::caption::{LineCommand, MeasureError, TextMetrics};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

// =========================================================================
// Measurement
// =========================================================================

/// Width `advance` px per char, ascent 8, descent 2 (line height 10).
pub fn char_measure(advance: f64) -> impl Fn(&str) -> Result<TextMetrics, MeasureError> {
    move |text: &str| -> Result<TextMetrics, MeasureError> {
        Ok(TextMetrics {
            width: text.chars().count() as f64 * advance,
            ascent: 8.0,
            descent: 2.0,
        })
    }
}

// =========================================================================
// Images
// =========================================================================

/// PNG-encoded solid image, as a file input would deliver it.
pub fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

// =========================================================================
// Extractors
// =========================================================================

/// The text of each line, in emission order.
pub fn texts(lines: &[LineCommand]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}
