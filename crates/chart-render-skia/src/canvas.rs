// File: crates/chart-render-skia/src/canvas.rs
// Summary: DrawSurface implementation that paints chart-core primitives onto a Skia canvas.

use chart_core::{DrawSurface, FontWeight, PixelPos, Rect, Rgba, TextMetrics};
use skia_safe as skia;

use crate::text::ChartFont;

pub(crate) fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_color(color));
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Where to centre a `width`-pixel stroke so it covers whole pixels.
///
/// Horizontal lines grow downwards from `y`, vertical lines grow leftwards
/// from `x`, so thick axes stay out of the cells above and right of them.
fn stroke_offset(from: PixelPos, to: PixelPos, width: i32) -> (f32, f32) {
    let w = width as f32;
    if from.y == to.y {
        (0.5, w / 2.0)
    } else if from.x == to.x {
        (1.0 - w / 2.0, 0.5)
    } else {
        (0.5, 0.5)
    }
}

/// Borrows a canvas and a font for the duration of one render call.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    font: &'a ChartFont,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, font: &'a ChartFont) -> Self {
        Self { canvas, font }
    }
}

impl TextMetrics for SkiaSurface<'_> {
    fn text_width(&self, text: &str) -> i32 { self.font.text_width(text) }
    fn weighted_width(&self, text: &str, weight: FontWeight) -> i32 {
        self.font.weighted_width(text, weight)
    }
    fn ascent(&self) -> i32 { self.font.ascent() }
    fn descent(&self) -> i32 { self.font.descent() }
}

impl DrawSurface for SkiaSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
        self.canvas.draw_rect(r, &fill(color));
    }

    fn draw_line(&mut self, from: PixelPos, to: PixelPos, width: i32, color: Rgba) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_color(color));
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width as f32);
        let (dx, dy) = stroke_offset(from, to, width);
        self.canvas.draw_line(
            (from.x as f32 + dx, from.y as f32 + dy),
            (to.x as f32 + dx, to.y as f32 + dy),
            &paint,
        );
    }

    fn fill_polygon(&mut self, points: &[PixelPos], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        path.close();
        let mut paint = fill(color);
        paint.set_anti_alias(true);
        self.canvas.draw_path(&path, &paint);
    }

    fn draw_text(&mut self, text: &str, at: PixelPos, weight: FontWeight, color: Rgba) {
        let mut paint = fill(color);
        paint.set_anti_alias(true);
        self.canvas.draw_str(text, (at.x as f32, at.y as f32), self.font.font(weight), &paint);
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.canvas.translate((dx as f32, dy as f32));
    }

    fn rotate(&mut self, degrees: i32) {
        self.canvas.rotate(degrees as f32, None);
    }
}
