//! SVG geometry for the dashboard charts.
//!
//! Coordinates are in the chart's own viewBox units; components pick the
//! viewBox and let CSS scale it.

use std::f64::consts::{FRAC_PI_2, TAU};

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Fraction of each slot occupied by its bar.
const BAR_FILL: f64 = 0.7;

/// Shares above this are drawn as a full circle; an SVG arc cannot close on itself.
const FULL_CIRCLE_SHARE: f64 = 0.9999;

/// One laid-out bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
}

/// Lay out `values` as vertical bars filling a `width` x `height` plot area.
///
/// Bars scale against the largest value; non-positive values get zero height.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    let bar_width = slot * BAR_FILL;
    let inset = (slot - bar_width) / 2.0;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = if max > 0.0 && *value > 0.0 { value / max * height } else { 0.0 };
            let x = i as f64 * slot + inset;
            Bar { x, y: height - bar_height, width: bar_width, height: bar_height, label_x: x + bar_width / 2.0 }
        })
        .collect()
}

/// SVG path for the pie wedge covering `[start, end)` of the circle, where both
/// are fractions of a full turn starting at twelve o'clock and going clockwise.
#[must_use]
pub fn pie_wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    if end - start >= FULL_CIRCLE_SHARE {
        return format!(
            "M {:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {cy:.2} Z",
            cx - r,
            cx + r,
            cx - r,
        );
    }
    let (x0, y0) = point_on_circle(cx, cy, r, start);
    let (x1, y1) = point_on_circle(cx, cy, r, end);
    let large_arc = u8::from(end - start > 0.5);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Wedge paths for consecutive `shares`, skipping none so indices line up.
#[must_use]
pub fn pie_layout(shares: &[f64], cx: f64, cy: f64, r: f64) -> Vec<String> {
    let mut start = 0.0;
    shares
        .iter()
        .map(|share| {
            let end = start + share;
            let path = pie_wedge_path(cx, cy, r, start, end);
            start = end;
            path
        })
        .collect()
}

/// Percentage label for a share, rounded to whole percent.
#[must_use]
pub fn percent_label(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

fn point_on_circle(cx: f64, cy: f64, r: f64, turn: f64) -> (f64, f64) {
    let angle = turn * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}
