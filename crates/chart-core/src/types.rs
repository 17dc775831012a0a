// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings, layout spacing).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Length and width of the axis arrowheads, in pixels.
pub const ARROW_SIZE: i32 = 10;
/// Gap between text and the element it labels.
pub const SPACING: i32 = 5;
/// Inset applied on each side of a bar within its column.
pub const GUTTER: i32 = 1;
/// Stroke width of the two axis baselines.
pub const AXIS_WIDTH: i32 = 2;
/// Stroke width of the light gridlines.
pub const GRID_WIDTH: i32 = 1;

/// Straight 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(10)
    }
}
