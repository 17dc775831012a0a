// File: crates/demo/src/main.rs
// Summary: Loads a chart data file, renders it to PNG and maps failures to exit codes.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use chart_core::{load_chart, ChartError};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const EXIT_INVALID_DATA: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ChartError>() {
            Some(invalid) => {
                error!(input = %cli.input.display(), "rejected chart data");
                eprintln!("invalid data: {invalid}");
                ExitCode::from(EXIT_INVALID_DATA)
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("Using input file: {}", cli.input.display());
    let model = load_chart(&cli.input)?;
    info!(
        points = model.point_count(),
        y_min = model.y_min(),
        y_max = model.y_max(),
        "Loaded chart (requested y max {})",
        model.y_max_requested()
    );

    let opts = cli.render_options();
    let out = cli.output_path();
    chart_render_skia::render_to_png(&model, &opts, &out)?;
    info!("Wrote {}", out.display());
    Ok(())
}
