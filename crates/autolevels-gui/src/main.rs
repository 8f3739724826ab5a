mod app;
mod convert;

use std::path::PathBuf;

use anyhow::{Context, Result};
use autolevels_core::color::correct::correct;
use autolevels_core::consts::{
    DEFAULT_SCALE_PERCENT, DEFAULT_THRESHOLD_PERCENT, DEFAULT_WINDOW_TITLE,
};
use autolevels_core::io::image_io::load_color_image;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "autolevels-view",
    about = "Show an image next to its automatic color correction"
)]
#[command(version)]
struct ViewArgs {
    /// Input image file
    file: PathBuf,

    /// Percentage of pixels per channel to saturate at each end (0-100)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_PERCENT)]
    threshold: f64,

    /// Display scale, in percent
    #[arg(short, long, default_value_t = DEFAULT_SCALE_PERCENT)]
    scale: f64,

    /// Window title
    #[arg(long, default_value = DEFAULT_WINDOW_TITLE)]
    title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ViewArgs::parse();

    let image = load_color_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let correction = correct(&image, args.threshold)?;

    app::show_side_by_side(
        correction.original,
        correction.corrected,
        args.scale,
        &args.title,
    )
}
