// File: crates/chart-core/src/render.rs
// Summary: Bar chart layout pipeline (descriptions -> numbers -> grid -> bars) and render options.

use tracing::debug;

use crate::chart::ChartModel;
use crate::geometry::{clamp, PixelPos, Rect};
use crate::grid::{divisions, grid_steps, label_steps};
use crate::surface::{DrawSurface, Layout, RecordingSurface, Scene};
use crate::text::{FontWeight, TextMetrics};
use crate::theme::Theme;
use crate::types::{Insets, ARROW_SIZE, AXIS_WIDTH, GRID_WIDTH, GUTTER, HEIGHT, SPACING, WIDTH};

/// Host-side settings for producing a chart image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            font_size: 14.0,
        }
    }
}

impl RenderOptions {
    /// The surface minus the insets; this is what the renderer lays out into.
    pub fn chart_area(&self) -> Rect {
        Rect::new(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.hsum() as i32,
            self.height - self.insets.vsum() as i32,
        )
    }
}

/// Pixel height of a bar for `value` in a `height`-pixel column spanning `y_min..=y_max`.
///
/// Values outside the axis range are clamped so the bar never leaves its column.
pub fn bar_height(value: i32, y_min: i32, y_max: i32, height: i32) -> i32 {
    let span = y_max as i64 - y_min as i64;
    if span <= 0 {
        return 0;
    }
    let above_min = clamp(value as i64, y_min as i64, y_max as i64) - y_min as i64;
    (above_min * height as i64 / span) as i32
}

/// Lays out and draws one [`ChartModel`].
///
/// Precondition: the model came from [`ChartModel::new`] and has at least one
/// point. The renderer keeps no state between calls, so identical inputs give
/// identical command lists.
pub struct ChartRenderer<'a> {
    model: &'a ChartModel,
    theme: Theme,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(model: &'a ChartModel) -> Self {
        Self { model, theme: Theme::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Compute the full command list for `area` without touching a real surface.
    pub fn layout<M: TextMetrics + ?Sized>(&self, area: Rect, metrics: &M) -> Scene {
        let mut recorder = RecordingSurface::new(metrics);
        let layout = self.paint(area, &mut recorder);
        Scene { commands: recorder.into_commands(), layout }
    }

    /// Lay out against the surface's own font metrics, then replay onto it.
    pub fn render<S: DrawSurface + ?Sized>(&self, area: Rect, surface: &mut S) -> Layout {
        let scene = self.layout(area, &*surface);
        scene.replay(surface);
        scene.layout
    }

    fn paint<S: DrawSurface + ?Sized>(&self, outer: Rect, s: &mut S) -> Layout {
        let descriptions = self.draw_descriptions(outer, s);
        let (numbers, label_step_width, label_step_height) = self.draw_numbers(descriptions, s);
        let (step_width, step_height) =
            grid_steps(numbers, self.model.y_axis().steps(), self.model.point_count());
        let grid = self.draw_grid(numbers, step_width, step_height, s);
        self.draw_bars(grid, s);
        debug!(
            points = self.model.point_count(),
            y_steps = self.model.y_axis().steps(),
            label_step_width,
            label_step_height,
            step_width,
            step_height,
            "laid out bar chart in {}x{}",
            outer.width,
            outer.height
        );
        Layout {
            outer,
            descriptions,
            numbers,
            grid,
            label_step_width,
            label_step_height,
            step_width,
            step_height,
        }
    }

    /// X description centred along the bottom edge, y description rotated
    /// along the left edge. Returns the area above and right of them.
    fn draw_descriptions<S: DrawSurface + ?Sized>(&self, area: Rect, s: &mut S) -> Rect {
        let color = self.theme.axis_label;

        let x_label = self.model.x_label();
        let x_width = s.text_width(x_label);
        let baseline = PixelPos::new(area.x + (area.width - x_width) / 2, area.bottom() - s.descent());
        s.draw_text(x_label, baseline, FontWeight::Regular, color);

        let y_label = self.model.y_label();
        let y_width = s.text_width(y_label);
        let (dx, dy) = (area.x + s.ascent(), area.y + (area.height + y_width) / 2);
        s.save();
        s.translate(dx, dy);
        s.rotate(270);
        s.draw_text(y_label, PixelPos::new(0, 0), FontWeight::Regular, color);
        s.restore();

        let reserve = s.line_height() + SPACING;
        area.shrink_left_bottom(reserve, reserve)
    }

    /// Bold right-aligned y tick values and one bold x value under each column.
    /// Returns the plot area and the step sizes used to place the labels.
    fn draw_numbers<S: DrawSurface + ?Sized>(&self, area: Rect, s: &mut S) -> (Rect, i32, i32) {
        let color = self.theme.tick_label;
        let bold = FontWeight::Bold;
        let axis = self.model.y_axis();
        // Ticks are monotonic, so the longest label is at one of the ends.
        let widest = s
            .weighted_width(&axis.min.to_string(), bold)
            .max(s.weighted_width(&axis.max.to_string(), bold));

        let (step_width, step_height) =
            label_steps(area, widest, axis.steps(), self.model.point_count());
        let plot = area.shrink_left_bottom(widest + SPACING, s.line_height() + SPACING);

        // Vertically centre each label on its step.
        let centre = (s.ascent() - s.descent()) / 2;
        for (value, y) in axis.tick_values().zip(divisions(plot.bottom(), -step_height, axis.steps())) {
            let label = value.to_string();
            let x = plot.x - SPACING - s.weighted_width(&label, bold);
            s.draw_text(&label, PixelPos::new(x, y + centre), bold, color);
        }

        let baseline = plot.bottom() + SPACING + s.ascent();
        for (point, left) in self.model.points().iter().zip(divisions(plot.x, step_width, i64::MAX)) {
            let label = point.x.to_string();
            let x = left + (step_width - s.weighted_width(&label, bold)) / 2;
            s.draw_text(&label, PixelPos::new(x, baseline), bold, color);
        }

        (plot, step_width, step_height)
    }

    /// Plot background, axes, light gridlines and arrowheads.
    /// Returns the cell area of the grid.
    fn draw_grid<S: DrawSurface + ?Sized>(
        &self,
        plot: Rect,
        step_width: i32,
        step_height: i32,
        s: &mut S,
    ) -> Rect {
        let columns = self.model.point_count() as i64;
        let rows = self.model.y_axis().steps();
        let (ox, oy) = (plot.x, plot.bottom());
        let grid_width = (columns * step_width as i64) as i32;
        let grid_height = (rows * step_height as i64) as i32;

        s.fill_rect(plot, self.theme.plot_background);

        let dark = self.theme.axis_line;
        let x_end = PixelPos::new(ox + grid_width + ARROW_SIZE, oy);
        let y_end = PixelPos::new(ox, oy - grid_height - ARROW_SIZE);
        s.draw_line(PixelPos::new(ox, oy), x_end, AXIS_WIDTH, dark);
        s.draw_line(PixelPos::new(ox, oy), y_end, AXIS_WIDTH, dark);

        let light = self.theme.grid;
        for y in divisions(oy, -step_height, rows).skip(1) {
            s.draw_line(PixelPos::new(ox, y), PixelPos::new(ox + grid_width, y), GRID_WIDTH, light);
        }
        for x in divisions(ox, step_width, columns).skip(1) {
            s.draw_line(PixelPos::new(x, oy), PixelPos::new(x, oy - grid_height), GRID_WIDTH, light);
        }

        let half = ARROW_SIZE / 2;
        let arrow = self.theme.arrow;
        let top = oy - grid_height - ARROW_SIZE;
        s.fill_polygon(
            &[
                PixelPos::new(ox - half, top),
                PixelPos::new(ox + half, top),
                PixelPos::new(ox, top - ARROW_SIZE),
            ],
            arrow,
        );
        let right = ox + grid_width + ARROW_SIZE;
        s.fill_polygon(
            &[
                PixelPos::new(right, oy - half),
                PixelPos::new(right, oy + half),
                PixelPos::new(right + ARROW_SIZE, oy),
            ],
            arrow,
        );

        Rect::new(ox, oy - grid_height, grid_width, grid_height)
    }

    /// One bar per point, left to right, standing on the bottom edge of `cells`.
    fn draw_bars<S: DrawSurface + ?Sized>(&self, cells: Rect, s: &mut S) {
        let count = self.model.point_count() as i32;
        let Some(step_width) = cells.width.checked_div(count) else {
            return;
        };
        let (y_min, y_max) = (self.model.y_min(), self.model.y_max());
        let bar_width = (step_width - 2 * GUTTER).max(0);
        for (point, left) in self.model.points().iter().zip(divisions(cells.x, step_width, i64::MAX)) {
            let height = bar_height(point.y, y_min, y_max, cells.height);
            let rect = Rect::new(left + GUTTER, cells.bottom() - height, bar_width, height);
            s.fill_rect(rect, self.theme.bar);
        }
    }
}
