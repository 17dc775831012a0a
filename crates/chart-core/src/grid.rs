// File: crates/chart-core/src/grid.rs
// Summary: Step-size and gridline position helpers shared by the label and grid stages.

use crate::geometry::Rect;
use crate::types::ARROW_SIZE;

/// Spacing of the axis numbers inside the area left by the descriptions.
///
/// `step_width = (width - label_width - 2 * arrow) / columns` and
/// `step_height = (height - 3 * arrow) / rows`.
pub fn label_steps(area: Rect, label_width: i32, rows: i64, columns: usize) -> (i32, i32) {
    split(area.width - label_width, area.height, rows, columns)
}

/// Gridline spacing for a plot area whose origin is its bottom-left corner.
///
/// Room is kept for the arrowheads: two arrow lengths to the right of the
/// last column, three above the top row.
pub fn grid_steps(plot: Rect, rows: i64, columns: usize) -> (i32, i32) {
    split(plot.width, plot.height, rows, columns)
}

// `rows` is at least one for any valid model. No columns means zero width.
fn split(width: i32, height: i32, rows: i64, columns: usize) -> (i32, i32) {
    let step_width = (width - 2 * ARROW_SIZE)
        .checked_div(columns as i32)
        .unwrap_or(0)
        .max(0);
    let step_height = ((height - 3 * ARROW_SIZE) as i64)
        .checked_div(rows)
        .unwrap_or(0)
        .max(0);
    (step_width, step_height as i32)
}

/// `start, start + step, ..., start + count * step`.
pub fn divisions(start: i32, step: i32, count: i64) -> impl Iterator<Item = i32> {
    (0..=count).map(move |i| (start as i64 + i * step as i64) as i32)
}
