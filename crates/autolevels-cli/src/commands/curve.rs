use std::path::PathBuf;

use anyhow::{Context, Result};
use autolevels_core::color::correct::{apply_curves, CurveSpec};
use autolevels_core::filters::curve::GrayPoint;
use autolevels_core::frame::Channel;
use autolevels_core::io::image_io::{load_color_image, save_color_image};
use clap::{Args, ValueEnum};

use crate::summary::print_curve_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ChannelArg {
    Red,
    Green,
    Blue,
    All,
}

impl ChannelArg {
    fn includes(self, channel: Channel) -> bool {
        match self {
            Self::Red => channel == Channel::Red,
            Self::Green => channel == Channel::Green,
            Self::Blue => channel == Channel::Blue,
            Self::All => true,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::All => "all",
        }
    }
}

#[derive(Args)]
pub struct CurveArgs {
    /// Input image file
    pub file: PathBuf,

    /// Intensity mapped to 0
    #[arg(long, default_value = "0")]
    pub black: u8,

    /// Intensity mapped to 255
    #[arg(long, default_value = "255")]
    pub white: u8,

    /// Gray point as "input,output" (e.g. "128,150")
    #[arg(long)]
    pub gray: Option<String>,

    /// Channel to apply the curve to; the others are left unchanged
    #[arg(long, value_enum, default_value = "all")]
    pub channel: ChannelArg,

    /// Output file path
    #[arg(short, long, default_value = "curved.png")]
    pub output: PathBuf,
}

pub fn run(args: &CurveArgs) -> Result<()> {
    let gray = args.gray.as_deref().map(parse_gray_point).transpose()?;
    let spec = CurveSpec {
        black: args.black,
        white: args.white,
        gray,
    };
    // Validate before decoding the image.
    spec.validate()?;

    print_curve_summary(&spec, args.channel.label());

    let image = load_color_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", image.width(), image.height());

    let curves = Channel::ALL.map(|channel| {
        if args.channel.includes(channel) {
            spec
        } else {
            CurveSpec::default()
        }
    });
    let result = apply_curves(&image, &curves)?;

    save_color_image(&result, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

fn parse_gray_point(s: &str) -> Result<GrayPoint> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid gray point format (expected 'input,output', each 0-255)")?;
    if parts.len() != 2 {
        anyhow::bail!("Gray point requires exactly 2 values: input,output");
    }
    Ok(GrayPoint::new(parts[0], parts[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gray_point() {
        assert_eq!(parse_gray_point("128, 150").unwrap(), GrayPoint::new(128, 150));
        assert!(parse_gray_point("128").is_err());
        assert!(parse_gray_point("128,300").is_err());
    }
}
