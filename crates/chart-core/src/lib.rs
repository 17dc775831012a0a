// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, layout pipeline and loader.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod render;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::ValueAxis;
pub use chart::ChartModel;
pub use error::ChartError;
pub use geometry::{PixelPos, Rect};
pub use loader::{load_chart, parse_chart};
pub use render::{bar_height, ChartRenderer, RenderOptions};
pub use series::Point;
pub use surface::{DrawCommand, DrawSurface, Layout, RecordingSurface, Scene};
pub use text::{FixedMetrics, FontWeight, TextMetrics};
pub use theme::Theme;
pub use types::{Insets, Rgba};
