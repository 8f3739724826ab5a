use std::path::PathBuf;

use anyhow::{Context, Result};
use autolevels_core::color::correct::analyze;
use autolevels_core::consts::DEFAULT_THRESHOLD_PERCENT;
use autolevels_core::filters::histogram::SaturationThreshold;
use autolevels_core::io::image_io::load_color_image;
use clap::Args;

use crate::summary::print_channel_table;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Percentage of pixels per channel to saturate at each end (0-100)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_PERCENT)]
    pub threshold: f64,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let threshold = SaturationThreshold::new(args.threshold)?;
    let image = load_color_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Threshold:   {}", threshold);
    println!();

    let channels = analyze(&image, threshold);
    print_channel_table(&channels);

    Ok(())
}
