// File: crates/chart-render-skia/src/text.rs
// Summary: Font selection and pixel metrics backed by the system font manager.

use chart_core::{FontWeight, TextMetrics};
use skia_safe as skia;

/// Regular and bold label fonts of one size.
pub struct ChartFont {
    regular: skia::Font,
    bold: skia::Font,
}

impl ChartFont {
    pub fn new(size: f32) -> Self {
        // Use system manager fallback
        let fonts = skia::FontMgr::default();
        Self {
            regular: load(&fonts, FontWeight::Regular, size),
            bold: load(&fonts, FontWeight::Bold, size),
        }
    }

    pub fn font(&self, weight: FontWeight) -> &skia::Font {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn load(fonts: &skia::FontMgr, weight: FontWeight, size: f32) -> skia::Font {
    let style = match weight {
        FontWeight::Regular => skia::FontStyle::normal(),
        FontWeight::Bold => skia::FontStyle::bold(),
    };
    let mut font = match fonts.legacy_make_typeface(None, style) {
        Some(tf) => skia::Font::from_typeface(tf, size),
        None => {
            tracing::warn!(?weight, "no system typeface found; labels will not render");
            skia::Font::default()
        }
    };
    font.set_size(size.max(1.0));
    font
}

impl TextMetrics for ChartFont {
    fn text_width(&self, text: &str) -> i32 {
        self.weighted_width(text, FontWeight::Regular)
    }

    fn weighted_width(&self, text: &str, weight: FontWeight) -> i32 {
        let (advance, _bounds) = self.font(weight).measure_str(text, None);
        advance.ceil() as i32
    }

    fn ascent(&self) -> i32 {
        // Skia reports ascent as a negative offset above the baseline.
        let (_spacing, metrics) = self.regular.metrics();
        (-metrics.ascent).ceil() as i32
    }

    fn descent(&self) -> i32 {
        let (_spacing, metrics) = self.regular.metrics();
        metrics.descent.ceil() as i32
    }
}
