// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Integer pixel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle; `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }
    pub const fn right(&self) -> i32 { self.x + self.width }
    pub const fn bottom(&self) -> i32 { self.y + self.height }

    /// Drop `left` pixels from the left edge and `bottom` pixels from the bottom edge.
    pub const fn shrink_left_bottom(&self, left: i32, bottom: i32) -> Self {
        Self::new(self.x + left, self.y, self.width - left, self.height - bottom)
    }

    /// True when `other` lies entirely within `self`.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_keeps_top_right_corner() {
        let r = Rect::new(0, 0, 400, 300);
        let inner = r.shrink_left_bottom(20, 20);
        assert_eq!(inner, Rect::new(20, 0, 380, 280));
        assert_eq!(inner.right(), r.right());
        assert!(r.contains_rect(&inner));
    }

    #[test]
    fn ltrb_round_trips_edges() {
        let r = Rect::from_ltrb(5, 7, 25, 17);
        assert_eq!((r.width, r.height), (20, 10));
        assert_eq!((r.right(), r.bottom()), (25, 17));
    }
}
