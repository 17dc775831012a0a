// File: crates/demo/src/cli.rs
// Summary: Command-line arguments and their mapping onto render options.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, RenderOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bar-chart")]
#[command(version, about = "Render a bar chart from a six-line data file")]
#[command(long_about = "Render a bar chart from a six-line data file.\n\n\
    Input lines: x description, y description, \"x,y\" pairs, y min, y max, y delta.\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Invalid data\n  \
    2 - I/O or rendering error")]
pub struct Cli {
    /// Chart data file
    pub input: PathBuf,

    /// Output PNG path (defaults to the input path with a .png extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Color preset: light, dark, solarized-light, solarized-dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Label font size in pixels
    #[arg(long, default_value_t = 14.0)]
    pub font_size: f32,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| self.input.with_extension("png"))
    }

    pub fn render_options(&self) -> RenderOptions {
        if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.theme)) {
            tracing::warn!(theme = %self.theme, "unknown theme, using light");
        }
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            font_size: self.font_size,
            ..RenderOptions::default()
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
