//! Text metric types and the measurement seam.
//!
//! The layout engine never owns a font. It asks a [`TextMeasure`] for the
//! extent of each candidate line, the way a canvas `measureText` call would.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("measurement unavailable: {0}")]
    Unavailable(String),
    #[error("metric `{0}` missing")]
    Missing(&'static str),
}

/// Measured extent of a line of text at the configured font and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width in pixels.
    pub width: f64,
    /// Distance above the baseline (positive).
    pub ascent: f64,
    /// Distance below the baseline (positive).
    pub descent: f64,
}

impl TextMetrics {
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }

    /// Name of the first non-finite field, if any.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if !self.width.is_finite() {
            Some("width")
        } else if !self.ascent.is_finite() {
            Some("ascent")
        } else if !self.descent.is_finite() {
            Some("descent")
        } else {
            None
        }
    }
}

/// Measurement capability supplied by the rendering surface.
///
/// Must be deterministic for the duration of one layout call.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<TextMetrics, MeasureError>;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Result<TextMetrics, MeasureError>,
{
    fn measure(&self, text: &str) -> Result<TextMetrics, MeasureError> {
        self(text)
    }
}

/// Fixed-advance measurement derived from font size alone.
///
/// Every `char` advances `size * advance_em`; ascent and descent are fixed
/// fractions of the size. Good enough for condensed display faces like
/// Impact, and needs no font file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMeasure {
    pub size: f64,
    pub advance_em: f64,
    pub ascent_em: f64,
    pub descent_em: f64,
}

impl AdvanceMeasure {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            advance_em: 0.55,
            ascent_em: 0.8,
            descent_em: 0.2,
        }
    }
}

impl From<&crate::config::FontConfig> for AdvanceMeasure {
    fn from(font: &crate::config::FontConfig) -> Self {
        Self {
            size: font.size,
            advance_em: font.advance_em,
            ascent_em: font.ascent_em,
            descent_em: font.descent_em,
        }
    }
}

impl TextMeasure for AdvanceMeasure {
    fn measure(&self, text: &str) -> Result<TextMetrics, MeasureError> {
        let chars = text.chars().count() as f64;
        Ok(TextMetrics {
            width: chars * self.size * self.advance_em,
            ascent: self.size * self.ascent_em,
            descent: self.size * self.descent_em,
        })
    }
}
