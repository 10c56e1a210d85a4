//! Greedy word wrap for top and bottom captions.
//!
//! Both passes walk the words once, probing each candidate line with the
//! caller's [`TextMeasure`]. The top pass reads words front to back and
//! stacks lines downward from the top edge. The bottom pass reads them back
//! to front, so the last word stays nearest the bottom edge and lines stack
//! upward.
//!
//! ```text
//!  y = 1.5·lh          ┌──────────────────────┐
//!  y = 1.5·lh + prev   │   TOP LINE ONE       │
//!                      │   TOP LINE TWO       │
//!                      │                      │
//!  y = prev − 1.5·lh   │   BOTTOM LINE ONE    │
//!  y = H − 0.5·lh      │   BOTTOM LINE TWO    │
//!                      └──────────────────────┘
//! ```
//!
//! The overflow probe measures `buffer + word` with no separator, while the
//! committed line joins them with a space. A committed line can therefore be
//! one space-width wider than the probe that admitted it.

use super::metrics::{TextMeasure, TextMetrics};
use crate::geometry::Dimensions;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

/// Fraction of the width budget a probed line must stay under.
pub const WRAP_RATIO: f64 = 0.95;
/// First top baseline sits this many line heights below the top edge;
/// later top lines advance by the same amount.
pub const TOP_BASELINE_FACTOR: f64 = 1.5;
/// First bottom baseline sits this many line heights above the bottom edge.
pub const BOTTOM_FIRST_FACTOR: f64 = 0.5;
/// Each further bottom line moves up by this many line heights.
pub const BOTTOM_STACK_FACTOR: f64 = 1.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid metrics for {text:?}: {reason}")]
    InvalidMetrics { text: String, reason: String },
}

/// One line of caption text and the baseline position to stroke/fill it at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineCommand {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy)]
enum Anchor {
    Top,
    Bottom { height: f64 },
}

impl Anchor {
    fn label(self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom { .. } => "bottom",
        }
    }
}

/// Per-call wrap state. Nothing here outlives one pass.
struct Pass<'m, M: ?Sized> {
    measure: &'m M,
    width_budget: f64,
    anchor: Anchor,
    /// Baseline of the previously emitted line, `None` until the first flush.
    offset: Option<f64>,
    lines: Vec<LineCommand>,
}

impl<'m, M: TextMeasure + ?Sized> Pass<'m, M> {
    fn new(measure: &'m M, width_budget: f64, anchor: Anchor) -> Self {
        Self {
            measure,
            width_budget,
            anchor,
            offset: None,
            lines: Vec::new(),
        }
    }

    fn measure(&self, text: &str) -> Result<TextMetrics, LayoutError> {
        let metrics = self
            .measure
            .measure(text)
            .map_err(|e| LayoutError::InvalidMetrics {
                text: text.to_string(),
                reason: e.to_string(),
            })?;
        match metrics.missing_field() {
            Some(field) => Err(LayoutError::InvalidMetrics {
                text: text.to_string(),
                reason: format!("{field} is not a finite number"),
            }),
            None => Ok(metrics),
        }
    }

    fn limit(&self) -> f64 {
        self.width_budget * WRAP_RATIO
    }

    /// Would `buffer` followed directly by `word` stay under the limit?
    fn fits(&self, buffer: &str, word: &str) -> Result<bool, LayoutError> {
        let probe = format!("{buffer}{word}");
        Ok(self.measure(&probe)?.width < self.limit())
    }

    /// Emit `buffer` as a finished line below (top) or above (bottom) the
    /// previous one.
    fn flush(&mut self, buffer: &str) -> Result<(), LayoutError> {
        let metrics = self.measure(buffer)?;
        let line_height = metrics.line_height();

        let y = match (self.anchor, self.offset) {
            (Anchor::Top, None) => line_height * TOP_BASELINE_FACTOR,
            (Anchor::Top, Some(prev)) => line_height * TOP_BASELINE_FACTOR + prev,
            (Anchor::Bottom { height }, None) => height - line_height * BOTTOM_FIRST_FACTOR,
            (Anchor::Bottom { .. }, Some(prev)) => prev - line_height * BOTTOM_STACK_FACTOR,
        };

        if metrics.width >= self.limit() && !buffer.contains(' ') {
            warn!(
                "{} caption word {:?} is wider than the budget ({:.1} >= {:.1})",
                self.anchor.label(),
                buffer,
                metrics.width,
                self.limit()
            );
        }

        self.lines.push(LineCommand {
            text: buffer.to_string(),
            x: (self.width_budget - metrics.width) / 2.0,
            y,
        });
        self.offset = Some(y);
        Ok(())
    }

    /// Greedy fill over `words` in the given order. `join` commits a word
    /// that fit onto the buffer.
    fn run<'w>(
        mut self,
        words: impl Iterator<Item = &'w str>,
        join: impl Fn(&mut String, &str),
    ) -> Result<Vec<LineCommand>, LayoutError> {
        let mut words = words.peekable();
        let Some(first) = words.next() else {
            return Ok(self.lines);
        };
        let mut buffer = first.to_string();
        let mut count = 1usize;

        if words.peek().is_none() {
            self.flush(&buffer)?;
        }

        while let Some(word) = words.next() {
            count += 1;
            let is_last = words.peek().is_none();

            if self.fits(&buffer, word)? {
                join(&mut buffer, word);
                if is_last {
                    self.flush(&buffer)?;
                }
            } else {
                // Overflow: close the current line, the word starts the next
                self.flush(&buffer)?;
                buffer = word.to_string();
                if is_last {
                    self.flush(&buffer)?;
                }
            }
        }

        debug!(
            "{} caption: {} words -> {} lines",
            self.anchor.label(),
            count,
            self.lines.len()
        );
        Ok(self.lines)
    }
}

/// Lay out a top caption, stacking lines downward from the top edge.
///
/// Words are split on single spaces. An empty string yields no lines.
pub fn layout_top<M: TextMeasure + ?Sized>(
    text: &str,
    width_budget: f64,
    measure: &M,
) -> Result<Vec<LineCommand>, LayoutError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Pass::new(measure, width_budget, Anchor::Top).run(text.split(' '), |buffer, word| {
        buffer.push(' ');
        buffer.push_str(word);
    })
}

/// Lay out a bottom caption, stacking lines upward from the bottom edge of
/// `canvas`. Lines come back bottom-most first.
///
/// `canvas.width` is the width budget.
pub fn layout_bottom<M: TextMeasure + ?Sized>(
    text: &str,
    canvas: Dimensions,
    measure: &M,
) -> Result<Vec<LineCommand>, LayoutError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let anchor = Anchor::Bottom {
        height: canvas.height,
    };
    Pass::new(measure, canvas.width, anchor).run(text.split(' ').rev(), |buffer, word| {
        buffer.insert(0, ' ');
        buffer.insert_str(0, word);
    })
}

/// Lay out both captions for `canvas`.
///
/// Top lines come first (top to bottom), then bottom lines (bottom to top).
/// Each call uses fresh state, so identical inputs give identical output.
pub fn layout<M: TextMeasure + ?Sized>(
    top: Option<&str>,
    bottom: Option<&str>,
    canvas: Dimensions,
    measure: &M,
) -> Result<Vec<LineCommand>, LayoutError> {
    let mut lines = layout_top(top.unwrap_or_default(), canvas.width, measure)?;
    lines.extend(layout_bottom(bottom.unwrap_or_default(), canvas, measure)?);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::MeasureError;
    use crate::test_helpers::{char_measure, texts};

    const CANVAS: Dimensions = Dimensions::new(100.0, 400.0);

    // Every helper measure: 10px per char, ascent 8, descent 2 → line height 10.

    // =========================================================================
    // top pass
    // =========================================================================

    #[test]
    fn single_top_word_emits_one_line() {
        let lines = layout(
            Some("A"),
            Some(""),
            Dimensions::new(1000.0, 500.0),
            &char_measure(10.0),
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![LineCommand {
                text: "A".into(),
                x: 495.0,
                y: 15.0,
            }]
        );
    }

    #[test]
    fn top_words_that_fit_share_a_line() {
        let lines = layout_top("one two", 1000.0, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["one two"]);
        // committed "one two" is 7 chars = 70px
        assert_eq!(lines[0].x, 465.0);
    }

    #[test]
    fn top_lines_stack_downward() {
        // limit 95px: "aaaa" + "bbbb" probes 80px, "aaaa bbbb" + "cccc" 130px
        let lines = layout_top("aaaa bbbb cccc dddd", 100.0, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["aaaa bbbb", "cccc dddd"]);
        assert_eq!(lines[0].y, 15.0);
        assert_eq!(lines[1].y, 30.0);
    }

    #[test]
    fn top_overflowing_last_word_gets_own_line() {
        let lines = layout_top("aaaa bbbb cccc", 100.0, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["aaaa bbbb", "cccc"]);
        assert!(lines[1].y > lines[0].y);
    }

    #[test]
    fn top_oversized_word_is_emitted_once() {
        let word = "x".repeat(50);
        let lines = layout_top(&word, 100.0, &char_measure(10.0)).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, word);
        // Overflows on both sides
        assert_eq!(lines[0].x, -200.0);
    }

    #[test]
    fn probe_omits_the_separator() {
        // "abcd" + "efghi" probes 9 chars = 90px < 95px, so the pair is
        // committed even though "abcd efghi" measures 100px.
        let lines = layout_top("abcd efghi", 100.0, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["abcd efghi"]);
        assert_eq!(lines[0].x, 0.0);
    }

    #[test]
    fn zero_budget_puts_every_word_on_its_own_line() {
        let lines = layout_top("a b c", 0.0, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["a", "b", "c"]);
        assert_eq!(
            lines.iter().map(|l| l.y).collect::<Vec<_>>(),
            vec![15.0, 30.0, 45.0]
        );
    }

    #[test]
    fn negative_budget_does_not_crash() {
        let lines = layout(
            Some("a b"),
            Some("c d"),
            Dimensions::new(-50.0, 400.0),
            &char_measure(10.0),
        )
        .unwrap();
        assert_eq!(texts(&lines), vec!["a", "b", "d", "c"]);
    }

    // =========================================================================
    // bottom pass
    // =========================================================================

    #[test]
    fn bottom_words_that_fit_anchor_near_bottom() {
        let canvas = Dimensions::new(1000.0, 500.0);
        let lines = layout(None, Some("one two three"), canvas, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["one two three"]);
        assert_eq!(lines[0].y, 495.0);
        assert_eq!(lines[0].x, 435.0);
    }

    #[test]
    fn bottom_lines_stack_upward_from_last_word() {
        let lines = layout_bottom("aaaa bbbb cccc", CANVAS, &char_measure(10.0)).unwrap();
        // Bottom-most line first; the overflowing first word tops the stack
        assert_eq!(texts(&lines), vec!["bbbb cccc", "aaaa"]);
        assert_eq!(lines[0].y, 395.0);
        assert_eq!(lines[1].y, 380.0);
    }

    #[test]
    fn bottom_middle_overflow_starts_new_line() {
        let lines = layout_bottom("aaaa bbbb cccc dddd", CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["cccc dddd", "aaaa bbbb"]);
        assert!(lines[1].y < lines[0].y);
    }

    #[test]
    fn bottom_oversized_word_is_emitted_once() {
        let word = "x".repeat(50);
        let lines = layout_bottom(&word, CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, word);
        assert_eq!(lines[0].x, -200.0);
        assert_eq!(lines[0].y, 395.0);
    }

    #[test]
    fn bottom_oversized_middle_word_gets_own_line() {
        let word = "x".repeat(12);
        let text = format!("aa {word} bb");
        let lines = layout_bottom(&text, CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["bb", word.as_str(), "aa"]);
        assert_eq!(
            lines.iter().map(|l| l.y).collect::<Vec<_>>(),
            vec![395.0, 380.0, 365.0]
        );
    }

    #[test]
    fn bottom_middle_overflow_with_uneven_words() {
        // "cc dddd" + "bbbbbbb" probes 140px and overflows; "bbbbbbb" + "a" fits
        let lines = layout_bottom("a bbbbbbb cc dddd", CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["cc dddd", "a bbbbbbb"]);
        assert_eq!(lines[0].x, 15.0);
        assert_eq!(lines[1].x, 5.0);
        assert_eq!(lines[1].y, 380.0);
    }

    #[test]
    fn bottom_single_word() {
        let lines = layout_bottom("solo", CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["solo"]);
        assert_eq!(lines[0].y, 395.0);
    }

    // =========================================================================
    // combined layout
    // =========================================================================

    #[test]
    fn empty_captions_produce_nothing() {
        let lines = layout(None, Some(""), CANVAS, &char_measure(10.0)).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn top_lines_precede_bottom_lines() {
        let lines = layout(Some("up"), Some("down"), CANVAS, &char_measure(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["up", "down"]);
        assert!(lines[0].y < lines[1].y);
    }

    #[test]
    fn every_word_lands_in_exactly_one_line() {
        let text = "the  quick brown fox jumps over the lazy dog again and again";
        let measure = char_measure(7.0);

        let top = layout_top(text, 100.0, &measure).unwrap();
        assert_eq!(texts(&top).join(" "), text);

        let mut bottom = layout_bottom(text, CANVAS, &measure).unwrap();
        bottom.reverse();
        assert_eq!(texts(&bottom).join(" "), text);
    }

    #[test]
    fn layout_is_idempotent() {
        let measure = char_measure(9.0);
        let first = layout(Some("say it"), Some("twice over"), CANVAS, &measure).unwrap();
        let second = layout(Some("say it"), Some("twice over"), CANVAS, &measure).unwrap();
        assert_eq!(first, second);
    }

    // =========================================================================
    // metric failures
    // =========================================================================

    #[test]
    fn measure_error_is_invalid_metrics() {
        let failing = |_: &str| -> Result<TextMetrics, MeasureError> {
            Err(MeasureError::Unavailable("no context".into()))
        };
        let err = layout(Some("hi"), None, CANVAS, &failing).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidMetrics { ref text, ref reason }
                if text == "hi" && reason.contains("no context")
        ));
    }

    #[test]
    fn missing_ascent_is_invalid_metrics() {
        let broken = |text: &str| -> Result<TextMetrics, MeasureError> {
            Ok(TextMetrics {
                width: text.len() as f64,
                ascent: f64::NAN,
                descent: 2.0,
            })
        };
        let err = layout(None, Some("hi"), CANVAS, &broken).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidMetrics { ref reason, .. } if reason.contains("ascent")
        ));
    }
}
