use std::path::PathBuf;

use anyhow::{Context, Result};
use autolevels_core::consts::{DEFAULT_SCALE_PERCENT, DEFAULT_THRESHOLD_PERCENT};
use autolevels_core::pipeline::config::{CompareConfig, CorrectionConfig};
use autolevels_core::pipeline::{run_correction_reported, CorrectionStage, ProgressReporter};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::{print_channel_table, print_correction_summary};

#[derive(Args)]
pub struct CorrectArgs {
    /// Input image file
    #[arg(required_unless_present = "config")]
    pub file: Option<PathBuf>,

    /// Correction config file (TOML); replaces the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Percentage of pixels per channel to saturate at each end (0-100)
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_PERCENT)]
    pub threshold: f64,

    /// Also write original and corrected side by side to this file
    #[arg(long)]
    pub compare: Option<PathBuf>,

    /// Scale of the side-by-side image, in percent
    #[arg(long, default_value_t = DEFAULT_SCALE_PERCENT, requires = "compare")]
    pub scale: f64,

    /// Output file path
    #[arg(short, long, default_value = "corrected.png")]
    pub output: PathBuf,
}

/// Drives an indicatif bar from correction stages.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: CorrectionStage) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}

pub fn run(args: &CorrectArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid correction config")?
    } else {
        build_config_from_args(args)?
    };

    print_correction_summary(&config);

    let stages = if config.compare.is_some() {
        CorrectionStage::COUNT
    } else {
        CorrectionStage::COUNT - 1
    };
    let bar = ProgressBar::new(stages as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let correction = run_correction_reported(&config, &reporter)
        .with_context(|| format!("Failed to correct {}", config.input.display()))?;

    reporter.bar.finish_with_message("Done");
    println!();
    print_channel_table(&correction.channels);
    println!("Output saved to {}", config.output.display());
    if let Some(ref compare) = config.compare {
        println!("Comparison saved to {}", compare.output.display());
    }

    Ok(())
}

fn build_config_from_args(args: &CorrectArgs) -> Result<CorrectionConfig> {
    let input = args
        .file
        .clone()
        .context("An input file is required without --config")?;

    Ok(CorrectionConfig {
        input,
        output: args.output.clone(),
        threshold_percent: args.threshold,
        compare: args.compare.as_ref().map(|output| CompareConfig {
            output: output.clone(),
            scale_percent: args.scale,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CorrectArgs,
    }

    #[test]
    fn scale_requires_compare() {
        assert!(TestCli::try_parse_from(["autolevels", "in.png", "--scale", "50"]).is_err());

        let cli =
            TestCli::try_parse_from(["autolevels", "in.png", "--compare", "cmp.png", "--scale", "50"])
                .unwrap();
        let config = build_config_from_args(&cli.args).unwrap();
        assert_eq!(config.compare.unwrap().scale_percent, 50.0);
    }

    #[test]
    fn default_scale_without_compare_is_accepted() {
        let cli = TestCli::try_parse_from(["autolevels", "in.png"]).unwrap();
        let config = build_config_from_args(&cli.args).unwrap();
        assert!(config.compare.is_none());
    }
}
