//! dichroma - color vision simulation for image files
//!
//! Loads images, renders them as seen with a color vision deficiency and
//! writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dichroma_sim::Deficiency;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dichroma")]
#[command(author, version, about = "Simulate color vision deficiencies on images")]
#[command(long_about = "
Renders images the way viewers with a color vision deficiency see them.

Modes: normal, deuteranopia (deutan), protanopia (protan),
       tritanopia (tritan), grayscale (gray)

Examples:
  dichroma simulate map.png -m deutan -o map_deutan.png
  dichroma simulate chart.png -m gray --full-range-gray -o chart_gray.png
  dichroma batch 'figures/*.png' -m deutan -m protan -o out/
  dichroma diff chart.png -m protan -o chart_diff.png
  dichroma modes
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one mode on an image
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),

    /// Simulate one or more modes on every file matching a pattern
    #[command(visible_alias = "b")]
    Batch(BatchArgs),

    /// Mark pixels that change strongly under a simulation
    #[command(visible_alias = "d")]
    Diff(DiffArgs),

    /// List available simulation modes
    Modes,
}

#[derive(Args)]
struct SimulateArgs {
    /// Input image
    input: PathBuf,

    /// Simulation mode
    #[arg(short, long)]
    mode: Deficiency,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Scale grayscale luminance to the full range instead of the legacy shift
    #[arg(long)]
    full_range_gray: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Glob pattern for input files
    input: String,

    /// Simulation modes (repeatable)
    #[arg(short, long, required = true)]
    mode: Vec<Deficiency>,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Output format extension (default: same as input)
    #[arg(short, long)]
    format: Option<String>,

    /// Scale grayscale luminance to the full range instead of the legacy shift
    #[arg(long)]
    full_range_gray: bool,
}

#[derive(Args)]
struct DiffArgs {
    /// Input image
    input: PathBuf,

    /// Simulation mode to compare against
    #[arg(short, long)]
    mode: Deficiency,

    /// Output difference map
    #[arg(short, long)]
    output: PathBuf,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Diff(args) => commands::diff::run(args, cli.verbose),
        Commands::Modes => commands::modes::run(),
    }
}
