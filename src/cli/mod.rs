//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod list;
mod scale;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelscale - edge-preserving pixel art upscalers for 24-bit BMP files
#[derive(Parser)]
#[command(name = "pxscale")]
#[command(about = "Pixelscale - edge-preserving pixel art upscalers for 24-bit BMP files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upscale a 24-bit BMP image
    ///
    /// Arguments are `[ALGORITHM] INPUT [OUTPUT]`. The algorithm defaults to
    /// the configured one (scale2x) and the output to `output.bmp`.
    Scale {
        /// [ALGORITHM] INPUT [OUTPUT]
        #[arg(required = true, num_args = 1..=3, value_name = "ARGS")]
        args: Vec<String>,

        /// Use this config file instead of searching for pxscale.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of worker threads (default: one per core)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        jobs: Option<u16>,

        /// Log progress to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the available algorithms with their scale factor and padding
    List,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scale { args, config, jobs, verbose } => {
            scale::run_scale(&args, config.as_deref(), jobs.map(usize::from), verbose)
        }
        Commands::List => list::run_list(),
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `level`. Calling this twice is harmless; the second
/// subscriber is ignored.
pub(crate) fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
