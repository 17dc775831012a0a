// File: crates/chart-core/src/text.rs
// Summary: Text measurement capability and a fixed-advance implementation for headless layout.

/// Weight of a drawn string. Axis numbers are bold, descriptions regular.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font measurements the layout needs. Values are in whole pixels.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
    /// Advance of `text` in the given weight. Ascent and descent are shared by both weights.
    fn weighted_width(&self, text: &str, weight: FontWeight) -> i32 {
        let _ = weight;
        self.text_width(text)
    }
    /// Distance from the baseline to the top of the tallest glyph (positive).
    fn ascent(&self) -> i32;
    /// Distance from the baseline to the bottom of the lowest glyph (positive).
    fn descent(&self) -> i32;

    fn line_height(&self) -> i32 {
        self.ascent() + self.descent()
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn text_width(&self, text: &str) -> i32 { (**self).text_width(text) }
    fn weighted_width(&self, text: &str, weight: FontWeight) -> i32 {
        (**self).weighted_width(text, weight)
    }
    fn ascent(&self) -> i32 { (**self).ascent() }
    fn descent(&self) -> i32 { (**self).descent() }
}

/// Monospace metrics: every char advances by `char_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub ascent: i32,
    pub descent: i32,
}

impl FixedMetrics {
    pub const fn new(char_width: i32, ascent: i32, descent: i32) -> Self {
        Self { char_width, ascent, descent }
    }
}

impl Default for FixedMetrics {
    /// Roughly a 12 px sans-serif font.
    fn default() -> Self {
        Self::new(7, 11, 3)
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }
    fn ascent(&self) -> i32 { self.ascent }
    fn descent(&self) -> i32 { self.descent }
}
