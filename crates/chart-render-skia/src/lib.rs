// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts the CPU raster surface, font metrics and PNG encoding.

pub mod canvas;
pub mod png;
pub mod text;

pub use canvas::SkiaSurface;
pub use png::{render_to_png, render_to_png_bytes};
pub use text::ChartFont;
