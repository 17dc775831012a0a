// File: crates/chart-core/src/surface.rs
// Summary: Immediate-mode drawing capability, recorded draw commands and the render scene.

use crate::geometry::{PixelPos, Rect};
use crate::text::{FixedMetrics, FontWeight, TextMetrics};
use crate::types::Rgba;

/// Drawing primitives a host surface must provide.
///
/// Text positions are baseline-left. Line `width` is in pixels. `rotate` turns the current transform
/// clockwise by `degrees` (y grows downwards), so 270 turns text to read
/// bottom-to-top.
pub trait DrawSurface: TextMetrics {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_line(&mut self, from: PixelPos, to: PixelPos, width: i32, color: Rgba);
    fn fill_polygon(&mut self, points: &[PixelPos], color: Rgba);
    fn draw_text(&mut self, text: &str, at: PixelPos, weight: FontWeight, color: Rgba);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: i32, dy: i32);
    fn rotate(&mut self, degrees: i32);
}

/// One recorded primitive call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgba },
    Line { from: PixelPos, to: PixelPos, width: i32, color: Rgba },
    FillPolygon { points: Vec<PixelPos>, color: Rgba },
    Text { text: String, at: PixelPos, weight: FontWeight, color: Rgba },
    Save,
    Restore,
    Translate { dx: i32, dy: i32 },
    Rotate { degrees: i32 },
}

impl DrawCommand {
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::Line { from, to, width, color } => {
                surface.draw_line(*from, *to, *width, *color)
            }
            DrawCommand::FillPolygon { points, color } => surface.fill_polygon(points, *color),
            DrawCommand::Text { text, at, weight, color } => {
                surface.draw_text(text, *at, *weight, *color)
            }
            DrawCommand::Save => surface.save(),
            DrawCommand::Restore => surface.restore(),
            DrawCommand::Translate { dx, dy } => surface.translate(*dx, *dy),
            DrawCommand::Rotate { degrees } => surface.rotate(*degrees),
        }
    }
}

/// Rectangles produced by each layout stage, plus the step sizes each stage used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub outer: Rect,
    /// Area left after the axis descriptions.
    pub descriptions: Rect,
    /// Plot area left after the axis numbers; origin is its bottom-left corner.
    pub numbers: Rect,
    /// Cells inside the grid; bars are drawn here.
    pub grid: Rect,
    /// Column and row spacing of the axis numbers, taken from `descriptions`.
    pub label_step_width: i32,
    pub label_step_height: i32,
    /// Column and row spacing of the gridlines, taken from `numbers`.
    pub step_width: i32,
    pub step_height: i32,
}

/// Ordered draw commands for one render plus the geometry used to place them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub layout: Layout,
}

impl Scene {
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.commands {
            cmd.apply(surface);
        }
    }
}

/// Surface that records every call instead of painting.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface<M = FixedMetrics> {
    metrics: M,
    commands: Vec<DrawCommand>,
}

impl<M: TextMetrics> RecordingSurface<M> {
    pub fn new(metrics: M) -> Self {
        Self { metrics, commands: Vec::new() }
    }
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }
    pub fn into_commands(self) -> Vec<DrawCommand> { self.commands }
}

impl<M: TextMetrics> TextMetrics for RecordingSurface<M> {
    fn text_width(&self, text: &str) -> i32 { self.metrics.text_width(text) }
    fn weighted_width(&self, text: &str, weight: FontWeight) -> i32 {
        self.metrics.weighted_width(text, weight)
    }
    fn ascent(&self) -> i32 { self.metrics.ascent() }
    fn descent(&self) -> i32 { self.metrics.descent() }
}

impl<M: TextMetrics> DrawSurface for RecordingSurface<M> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
    fn draw_line(&mut self, from: PixelPos, to: PixelPos, width: i32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
    fn fill_polygon(&mut self, points: &[PixelPos], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
    }
    fn draw_text(&mut self, text: &str, at: PixelPos, weight: FontWeight, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, weight, color });
    }
    fn save(&mut self) { self.commands.push(DrawCommand::Save); }
    fn restore(&mut self) { self.commands.push(DrawCommand::Restore); }
    fn translate(&mut self, dx: i32, dy: i32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }
    fn rotate(&mut self, degrees: i32) {
        self.commands.push(DrawCommand::Rotate { degrees });
    }
}
