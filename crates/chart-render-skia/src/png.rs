// File: crates/chart-render-skia/src/png.rs
// Summary: Headless PNG rendering of a chart model using Skia CPU raster surfaces.

use anyhow::{anyhow, Context, Result};
use chart_core::{ChartModel, ChartRenderer, RenderOptions};
use skia_safe as skia;
use tracing::debug;

use crate::canvas::{to_color, SkiaSurface};
use crate::text::ChartFont;

/// Render `model` into an in-memory PNG.
pub fn render_to_png_bytes(model: &ChartModel, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let font = ChartFont::new(opts.font_size);

    let canvas = surface.canvas();
    canvas.clear(to_color(opts.theme.background));
    let mut target = SkiaSurface::new(canvas, &font);
    let layout = ChartRenderer::new(model)
        .with_theme(opts.theme)
        .render(opts.chart_area(), &mut target);
    debug!(?layout, theme = opts.theme.name, "painted chart");

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `model` to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    model: &ChartModel,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(model, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
