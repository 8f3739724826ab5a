mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autolevels", about = "Per-channel automatic color correction")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stretch each color channel, clipping a share of extreme pixels
    Correct(commands::correct::CorrectArgs),
    /// Show per-channel histogram statistics and clip points
    Analyze(commands::analyze::AnalyzeArgs),
    /// Apply a manual curve with optional gray point
    Curve(commands::curve::CurveArgs),
    /// Print a default correction config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Correct(args) => commands::correct::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Curve(args) => commands::curve::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
