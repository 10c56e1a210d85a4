//! Caption layout: meme-style top and bottom text wrapping.
//!
//! The module is split into:
//! - **Metrics**: [`TextMetrics`], the [`TextMeasure`] seam, and the
//!   font-file-free [`AdvanceMeasure`]
//! - **Layout**: the two greedy wrap passes producing [`LineCommand`]s
//!
//! Layout never draws. Callers hand each [`LineCommand`] to a
//! [`Surface`](crate::render::Surface), which strokes then fills it.

mod layout;
mod metrics;

pub use layout::{
    BOTTOM_FIRST_FACTOR, BOTTOM_STACK_FACTOR, LayoutError, LineCommand, TOP_BASELINE_FACTOR,
    WRAP_RATIO, layout, layout_bottom, layout_top,
};
pub use metrics::{AdvanceMeasure, MeasureError, TextMeasure, TextMetrics};
