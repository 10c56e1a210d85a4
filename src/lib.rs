//! # Memeframe
//!
//! Put an image on a fixed-size canvas and caption it meme-style: top text
//! hanging from the top edge, bottom text standing on the bottom edge.
//!
//! # Architecture: Two Pure Engines, One Stateful Controller
//!
//! ```text
//! bytes ──► controller ──► geometry::fit ──► Placement ─┐
//! text  ──► controller ──► caption::layout ──► Lines ───┼──► Frame ──► render::Surface
//!                                                       │
//!                          caption::TextMeasure ◄───────┘ (supplied by caller)
//! ```
//!
//! - [`geometry`] and [`caption`] are pure functions of their inputs. They
//!   hold no state between calls and never draw.
//! - [`controller`] owns what changes between user actions (the selected
//!   image and the caption form) and turns commands into [`controller::Frame`]s.
//! - [`render`] draws a frame onto a [`render::Surface`]; the shipped surface
//!   writes a self-contained SVG.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Fit an image into the canvas preserving aspect ratio |
//! | [`caption`] | Greedy word wrap for top and bottom captions |
//! | [`controller`] | Selected image + caption form, command dispatch |
//! | [`render`] | `Surface` trait, raster compositing, SVG output |
//! | [`config`] | `memeframe.toml` loading, merging, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Measurement Is Injected
//!
//! Caption layout depends on glyph metrics, but the layout engine never
//! loads a font. It calls a [`caption::TextMeasure`] for every candidate
//! line. Tests use exact closures; the CLI uses [`caption::AdvanceMeasure`],
//! which derives metrics from the configured font size.
//!
//! ## SVG Captions
//!
//! Captions are written as SVG `<text>` with stroke and fill, so the viewer
//! renders the real font. The image layer is composited with the `image`
//! crate and embedded as a PNG data URI, keeping the output a single file.

pub mod caption;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
