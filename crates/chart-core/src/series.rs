// File: crates/chart-core/src/series.rs
// Summary: Data points of the single bar series.

/// One (x, y) sample. `x` labels the column, `y` sets the bar height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Copy of `points` ordered by ascending x. Equal x keep their input order.
pub fn sorted_by_x(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    // `sort_by_key` is stable.
    out.sort_by_key(|p| p.x);
    out
}
