//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.
//!
//! ## Fit
//!
//! ```text
//! Canvas 400x400
//! Image 400.0x200.0 at (0.0, 100.0), fills width
//! ```
//!
//! ## Layout
//!
//! ```text
//! 001 "ONE DOES NOT" at (47.0, 60.0)
//! 002 "SIMPLY" at (134.0, 380.0)
//! ```

use crate::caption::LineCommand;
use crate::geometry::{Axis, Dimensions, Placement};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Width => "width",
        Axis::Height => "height",
    }
}

/// Format a fit result against its canvas.
pub fn format_placement(canvas: Dimensions, placement: &Placement) -> Vec<String> {
    vec![
        format!("Canvas {}x{}", canvas.width, canvas.height),
        format!(
            "Image {:.1}x{:.1} at ({:.1}, {:.1}), fills {}",
            placement.width,
            placement.height,
            placement.start_x,
            placement.start_y,
            axis_name(placement.filled_axis())
        ),
    ]
}

/// Format caption lines in emission order.
pub fn format_lines(lines: &[LineCommand]) -> Vec<String> {
    if lines.is_empty() {
        return vec!["(no captions)".to_string()];
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                "{} {:?} at ({:.1}, {:.1})",
                format_index(i + 1),
                line.text,
                line.x,
                line.y
            )
        })
        .collect()
}

/// Format what the render command wrote.
pub fn format_render_output(svg: &Path, png: Option<&Path>, line_count: usize) -> Vec<String> {
    let mut out = vec![format!("SVG → {}", svg.display())];
    if let Some(png) = png {
        out.push(format!("PNG → {}", png.display()));
    }
    out.push(format!("Rendered {line_count} caption lines"));
    out
}

pub fn print_placement(canvas: Dimensions, placement: &Placement) {
    for line in format_placement(canvas, placement) {
        println!("{}", line);
    }
}

pub fn print_lines(lines: &[LineCommand]) {
    for line in format_lines(lines) {
        println!("{}", line);
    }
}

pub fn print_render_output(svg: &Path, png: Option<&Path>, line_count: usize) {
    for line in format_render_output(svg, png, line_count) {
        println!("{}", line);
    }
}
