// File: crates/chart-core/tests/layout.rs
// Purpose: Validate layout geometry and the emitted draw commands for a known dataset.

use chart_core::text::FontWeight;
use chart_core::{
    ChartModel, ChartRenderer, DrawCommand, FixedMetrics, PixelPos, Point, Rect, RecordingSurface,
    Theme,
};

fn items_model() -> ChartModel {
    let points: Vec<Point> = [(1, 8), (2, 20), (3, 22), (4, 10), (5, 4)]
        .into_iter()
        .map(Point::from)
        .collect();
    ChartModel::new(&points, "Items", "Count", 0, 22, 6).expect("valid model")
}

fn bars(commands: &[DrawCommand], theme: &Theme) -> Vec<Rect> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } if *color == theme.bar => Some(*rect),
            _ => None,
        })
        .collect()
}

fn lines(commands: &[DrawCommand], color: chart_core::Rgba) -> Vec<(PixelPos, PixelPos)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, color: c, .. } if *c == color => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

fn texts(commands: &[DrawCommand]) -> Vec<(&str, PixelPos)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
        .collect()
}

#[test]
fn items_scenario_geometry() {
    let model = items_model();
    assert_eq!(model.y_max(), 24);

    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let layout = scene.layout;
    assert_eq!(layout.descriptions, Rect::new(19, 0, 381, 281));
    assert_eq!(layout.numbers, Rect::new(38, 0, 362, 262));
    // Numbers: (381 - 14 - 2*10) / 5 and (281 - 3*10) / 4 on the descriptions area.
    assert_eq!((layout.label_step_width, layout.label_step_height), (69, 62));
    // Grid: the same formulas on the plot area left after the numbers.
    assert_eq!((layout.step_width, layout.step_height), (68, 58));
    assert_eq!(layout.grid, Rect::new(38, 30, 340, 232));

    let theme = Theme::default();
    let bars = bars(&scene.commands, &theme);
    assert_eq!(bars.len(), 5);
    let heights: Vec<i32> = bars.iter().map(|r| r.height).collect();
    assert_eq!(heights, vec![77, 193, 212, 96, 38]);
    for (i, bar) in bars.iter().enumerate() {
        assert_eq!(bar.x, 38 + i as i32 * 68 + 1);
        assert_eq!(bar.width, 66);
        assert_eq!(bar.bottom(), 262);
    }
}

#[test]
fn grid_divisions_match_steps_and_points() {
    let model = items_model();
    let theme = Theme::default();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());

    let light = lines(&scene.commands, theme.grid);
    let horizontal: Vec<i32> = light.iter().filter(|(a, b)| a.y == b.y).map(|(a, _)| a.y).collect();
    let vertical: Vec<i32> = light.iter().filter(|(a, b)| a.x == b.x).map(|(a, _)| a.x).collect();
    assert_eq!(horizontal, vec![204, 146, 88, 30]);
    assert_eq!(vertical, vec![106, 174, 242, 310, 378]);

    let axes = lines(&scene.commands, theme.axis_line);
    assert_eq!(axes.len(), 2);
    assert!(axes.iter().all(|(from, _)| *from == PixelPos::new(38, 262)));
}

#[test]
fn arrowheads_sit_past_the_grid() {
    let model = items_model();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let polygons: Vec<&Vec<PixelPos>> = scene
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { points, .. } => Some(points),
            _ => None,
        })
        .collect();
    assert_eq!(polygons.len(), 2);
    // y-axis arrow tip, then x-axis arrow tip
    assert_eq!(polygons[0][2], PixelPos::new(38, 10));
    assert_eq!(polygons[1][2], PixelPos::new(398, 262));
    for poly in polygons {
        for p in poly {
            assert!(Rect::new(0, 0, 400, 300).contains_rect(&Rect::new(p.x, p.y, 0, 0)));
        }
    }
}

#[test]
fn number_labels_are_placed_per_step_and_column() {
    let model = items_model();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let texts = texts(&scene.commands);

    // x description, y description, 5 y ticks, 5 x values
    assert_eq!(texts.len(), 12);
    assert_eq!(texts[0], ("Items", PixelPos::new(182, 297)));
    assert_eq!(texts[1], ("Count", PixelPos::new(0, 0)));

    let y_ticks = &texts[2..7];
    assert_eq!(
        y_ticks,
        &[
            ("0", PixelPos::new(26, 266)),
            ("6", PixelPos::new(26, 204)),
            ("12", PixelPos::new(19, 142)),
            ("18", PixelPos::new(19, 80)),
            ("24", PixelPos::new(19, 18)),
        ]
    );

    let x_values: Vec<(&str, i32)> = texts[7..].iter().map(|(t, p)| (*t, p.x)).collect();
    assert_eq!(x_values, vec![("1", 69), ("2", 138), ("3", 207), ("4", 276), ("5", 345)]);
    assert!(texts[7..].iter().all(|(_, p)| p.y == 278));
}

#[test]
fn plot_is_filled_before_the_grid() {
    let model = items_model();
    let theme = Theme::default();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let fill = scene
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == theme.plot_background))
        .expect("plot background");
    assert_eq!(
        scene.commands[fill],
        DrawCommand::FillRect { rect: scene.layout.numbers, color: theme.plot_background }
    );
    let first_line = scene
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { .. }))
        .expect("grid lines");
    assert!(fill < first_line);
}

#[test]
fn axes_are_thicker_than_gridlines() {
    let model = items_model();
    let theme = Theme::default();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    for cmd in &scene.commands {
        if let DrawCommand::Line { width, color, .. } = cmd {
            let expected = if *color == theme.axis_line { 2 } else { 1 };
            assert_eq!(*width, expected, "{cmd:?}");
        }
    }
}

#[test]
fn numbers_are_bold_and_descriptions_regular() {
    let model = items_model();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let weights: Vec<(&str, FontWeight)> = scene
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, weight, .. } => Some((text.as_str(), *weight)),
            _ => None,
        })
        .collect();
    assert_eq!(weights[0], ("Items", FontWeight::Regular));
    assert_eq!(weights[1], ("Count", FontWeight::Regular));
    assert!(weights[2..].iter().all(|(_, w)| *w == FontWeight::Bold));
}

#[test]
fn widest_y_label_is_measured_from_the_endpoints() {
    struct CountingMetrics(std::cell::Cell<usize>);
    impl chart_core::TextMetrics for CountingMetrics {
        fn text_width(&self, text: &str) -> i32 {
            self.0.set(self.0.get() + 1);
            text.len() as i32 * 7
        }
        fn ascent(&self) -> i32 { 11 }
        fn descent(&self) -> i32 { 3 }
    }

    let model = ChartModel::new(&[Point::new(1, 5)], "x", "y", 0, 40, 1).unwrap();
    let metrics = CountingMetrics(std::cell::Cell::new(0));
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &metrics);
    // x label, y label, two endpoint widths, one per tick (41), one x value
    assert_eq!(metrics.0.get(), 2 + 2 + 41 + 1);
    assert_eq!(scene.layout.label_step_width, 347);
}

#[test]
fn y_description_is_rotated_in_isolation() {
    let model = items_model();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 400, 300), &FixedMetrics::default());
    let start = scene
        .commands
        .iter()
        .position(|c| *c == DrawCommand::Save)
        .expect("save before rotated label");
    assert_eq!(scene.commands[start + 1], DrawCommand::Translate { dx: 11, dy: 167 });
    assert_eq!(scene.commands[start + 2], DrawCommand::Rotate { degrees: 270 });
    assert!(matches!(&scene.commands[start + 3], DrawCommand::Text { text, .. } if text == "Count"));
    assert_eq!(scene.commands[start + 4], DrawCommand::Restore);
}

#[test]
fn layout_is_idempotent() {
    let model = items_model();
    let renderer = ChartRenderer::new(&model).with_theme(Theme::dark());
    let metrics = FixedMetrics::new(6, 10, 2);
    let area = Rect::new(5, 5, 517, 333);
    assert_eq!(renderer.layout(area, &metrics), renderer.layout(area, &metrics));
}

#[test]
fn render_replays_the_same_commands_as_layout() {
    let model = items_model();
    let renderer = ChartRenderer::new(&model);
    let area = Rect::new(0, 0, 640, 480);

    let mut surface = RecordingSurface::new(FixedMetrics::default());
    let layout = renderer.render(area, &mut surface);
    let scene = renderer.layout(area, &FixedMetrics::default());
    assert_eq!(layout, scene.layout);
    assert_eq!(surface.commands(), scene.commands.as_slice());
}

#[test]
fn bars_stay_inside_grid_and_grow_with_value() {
    let points: Vec<Point> = (0..12).map(|i| Point::new(i, i * 9 - 10)).collect();
    let model = ChartModel::new(&points, "x", "y", -10, 90, 7).unwrap();
    let theme = Theme::default();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 800, 600), &FixedMetrics::default());

    let bars = bars(&scene.commands, &theme);
    assert_eq!(bars.len(), 12);
    assert_eq!(bars[0].height, 0);
    for pair in bars.windows(2) {
        assert!(pair[0].height <= pair[1].height);
        assert!(pair[0].right() < pair[1].x);
    }
    for bar in &bars {
        assert!(scene.layout.grid.contains_rect(bar), "{bar:?} outside {:?}", scene.layout.grid);
    }
}

#[test]
fn value_at_max_fills_the_column() {
    let points = [Point::new(1, 0), Point::new(2, 120)];
    let model = ChartModel::new(&points, "x", "y", 0, 100, 40).unwrap();
    let scene = ChartRenderer::new(&model).layout(Rect::new(0, 0, 300, 200), &FixedMetrics::default());
    let bars = bars(&scene.commands, &Theme::default());
    assert_eq!(bars[0].height, 0);
    assert_eq!(bars[1].height, scene.layout.grid.height);
    assert_eq!(bars[1].y, scene.layout.grid.y);
}
