//! Command-line interface for building a single mosaic

use crate::io::configuration::{
    DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT_IMAGE, DEFAULT_TARGET_IMAGE, DEFAULT_TILE_DIRECTORY,
};
use crate::io::diagnostics::TracingDiagnostics;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::mosaic::builder::{MosaicConfig, MosaicSummary, build};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild a photograph from a library of tile images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Photograph to turn into a mosaic
    #[arg(value_name = "TARGET", default_value = DEFAULT_TARGET_IMAGE)]
    pub target: PathBuf,

    /// Directory of tile images (.jpg, .jpeg, .png)
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// Edge length in pixels of each block and tile
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Output image path; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_IMAGE)]
    pub output: PathBuf,

    /// Number of worker threads (defaults to the number of cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Convert the arguments into a validated run configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the block size or thread count is zero
    pub fn to_config(&self) -> Result<MosaicConfig> {
        let config = MosaicConfig::new(
            &self.target,
            &self.tiles,
            self.block_size,
            &self.output,
        )?;
        match self.threads {
            Some(threads) => config.with_worker_threads(threads),
            None => Ok(config),
        }
    }
}

/// Runs one mosaic build with the display chosen on the command line
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the mosaic and report where it was saved
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation or any build stage fails
    pub fn run(&self) -> Result<MosaicSummary> {
        let config = self.cli.to_config()?;

        let summary = if self.cli.should_show_progress() {
            let progress = ProgressManager::new();
            let result = build(&config, &progress);
            progress.finish();
            result?
        } else {
            build(&config, &TracingDiagnostics)?
        };

        // Allow print for user feedback on completion
        #[allow(clippy::print_stdout)]
        if self.cli.should_show_progress() {
            println!(
                "Mosaic saved to {} ({}x{}, {} blocks, {} of {} tiles used)",
                summary.output_path.display(),
                summary.width,
                summary.height,
                summary.blocks,
                summary.distinct_tiles_used,
                summary.tiles_loaded
            );
        }

        Ok(summary)
    }
}
