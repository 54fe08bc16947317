//! End-to-end mosaic construction
//!
//! A run moves through fixed stages: validate the configuration, decode and
//! crop the target, load the tile library (aborting if it is empty), match
//! every block on a worker pool, paste the results into the canvas as they
//! arrive, and finally encode the canvas. Nothing is written unless every
//! stage succeeds.

use crate::io::diagnostics::Diagnostics;
use crate::io::error::{MosaicError, Result, block_error, invalid_parameter};
use crate::io::image::{decode_rgb, encode};
use crate::library::tiles::TileLibrary;
use crate::mosaic::block::process_block;
use crate::mosaic::coverage::BlockCoverage;
use crate::mosaic::grid::{block_coordinates, crop_to_grid, cropped_dimensions};
use image::{ImageFormat, RgbImage, imageops};
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Validated parameters for one mosaic run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    target_path: PathBuf,
    tile_directory: PathBuf,
    block_size: NonZeroU32,
    output_path: PathBuf,
    worker_threads: Option<NonZeroUsize>,
}

impl MosaicConfig {
    /// Create a configuration, rejecting a zero block size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `block_size` is zero
    pub fn new(
        target_path: impl Into<PathBuf>,
        tile_directory: impl Into<PathBuf>,
        block_size: u32,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let block_size = NonZeroU32::new(block_size)
            .ok_or_else(|| invalid_parameter("block_size", &block_size, &"must be positive"))?;

        Ok(Self {
            target_path: target_path.into(),
            tile_directory: tile_directory.into(),
            block_size,
            output_path: output_path.into(),
            worker_threads: None,
        })
    }

    /// Bound the worker pool to `threads` threads
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `threads` is zero
    pub fn with_worker_threads(mut self, threads: usize) -> Result<Self> {
        let threads = NonZeroUsize::new(threads)
            .ok_or_else(|| invalid_parameter("threads", &threads, &"must be positive"))?;
        self.worker_threads = Some(threads);
        Ok(self)
    }

    /// Check the parts of the configuration that depend on the file system
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile directory does not exist or is
    /// not a directory, or if the output extension names no known format
    pub fn validate(&self) -> Result<()> {
        if !self.tile_directory.is_dir() {
            return Err(invalid_parameter(
                "tile_directory",
                &self.tile_directory.display(),
                &"not a readable directory",
            ));
        }
        ImageFormat::from_path(&self.output_path).map_err(|error| {
            invalid_parameter("output", &self.output_path.display(), &error)
        })?;
        Ok(())
    }

    /// Image to turn into a mosaic
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Directory holding candidate tile images
    pub fn tile_directory(&self) -> &Path {
        &self.tile_directory
    }

    /// Edge length of blocks and tiles in pixels
    pub const fn block_size(&self) -> NonZeroU32 {
        self.block_size
    }

    /// Destination of the encoded mosaic
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Worker pool size, if bounded explicitly
    pub const fn worker_threads(&self) -> Option<NonZeroUsize> {
        self.worker_threads
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicSummary {
    /// Where the mosaic was written
    pub output_path: PathBuf,
    /// Mosaic width in pixels
    pub width: u32,
    /// Mosaic height in pixels
    pub height: u32,
    /// Number of blocks replaced
    pub blocks: usize,
    /// Number of tiles in the library
    pub tiles_loaded: usize,
    /// Number of library tiles that appear at least once
    pub distinct_tiles_used: usize,
}

/// An assembled canvas with per-tile usage counts
#[derive(Debug, Clone)]
pub struct Composition {
    /// The mosaic pixels
    pub canvas: RgbImage,
    /// How many blocks each library tile was pasted into, in library order
    pub tile_usage: Vec<usize>,
}

impl Composition {
    /// Number of library tiles used at least once
    pub fn distinct_tiles_used(&self) -> usize {
        self.tile_usage.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of blocks pasted
    pub fn blocks(&self) -> usize {
        self.tile_usage.iter().sum()
    }
}

/// Run the whole pipeline described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The tile directory is missing or the output format is unknown
///   (`InvalidParameter`)
/// - The target cannot be decoded (`ImageLoad`)
/// - The target is smaller than one block (`InvalidParameter`)
/// - No tile could be loaded (`EmptyLibrary`)
/// - Any block fails to process (`BlockProcessing`)
/// - The mosaic cannot be written (`ImageExport` or `FileSystem`)
///
/// No output file is created when an error is returned.
pub fn build(config: &MosaicConfig, diagnostics: &dyn Diagnostics) -> Result<MosaicSummary> {
    config.validate()?;

    let block_size = config.block_size();
    let target = decode_rgb(config.target_path())?;
    let (width, height) = cropped_dimensions(target.width(), target.height(), block_size);
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "block_size",
            &block_size,
            &format!(
                "larger than the target image ({}x{})",
                target.width(),
                target.height()
            ),
        ));
    }
    let target = crop_to_grid(&target, block_size);

    let library = TileLibrary::load(config.tile_directory(), block_size, diagnostics);
    if library.is_empty() {
        return Err(MosaicError::EmptyLibrary {
            directory: config.tile_directory().to_path_buf(),
        });
    }

    let composition = compose(&target, &library, config.worker_threads(), diagnostics)?;
    encode(&composition.canvas, config.output_path())?;

    tracing::info!(
        output = %config.output_path().display(),
        width,
        height,
        "Mosaic saved"
    );

    Ok(MosaicSummary {
        output_path: config.output_path().to_path_buf(),
        width,
        height,
        blocks: composition.blocks(),
        tiles_loaded: library.len(),
        distinct_tiles_used: composition.distinct_tiles_used(),
    })
}

/// Replace every block of an already-cropped `target` with its best tile
///
/// Blocks are matched on a pool of `workers` threads (rayon's default when
/// `None`). Results flow back through a channel and are pasted by the calling
/// thread in completion order, keyed by each result's coordinate.
///
/// # Errors
///
/// Returns `InvalidParameter` if `target` is empty or not a whole number of
/// blocks, `WorkerPool` if the pool cannot start, and `BlockProcessing` if
/// any block fails or the canvas is not covered exactly once
pub fn compose(
    target: &RgbImage,
    library: &TileLibrary,
    workers: Option<NonZeroUsize>,
    diagnostics: &dyn Diagnostics,
) -> Result<Composition> {
    let block_size = library.block_size();
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 || cropped_dimensions(width, height, block_size) != (width, height) {
        return Err(invalid_parameter(
            "target",
            &format!("{width}x{height}"),
            &format!("dimensions must be non-zero multiples of block size {block_size}"),
        ));
    }

    let pool = worker_pool(workers)?;
    let coordinates: Vec<_> = block_coordinates(width, height, block_size).collect();
    diagnostics.blocks_dispatched(coordinates.len());

    let mut canvas = RgbImage::new(width, height);
    let mut coverage = BlockCoverage::new(width, height, block_size);
    let mut tile_usage = vec![0usize; library.len()];

    pool.in_place_scope(|scope| -> Result<()> {
        let (sender, receiver) = mpsc::channel();
        for coordinate in coordinates {
            let sender = sender.clone();
            scope.spawn(move |_| {
                // Send only fails once the consumer has bailed out
                let _ = sender.send(process_block(coordinate, target, block_size, library));
            });
        }
        drop(sender);

        for result in receiver {
            let matched = result?;
            if !coverage.mark(matched.coordinate) {
                return Err(block_error(
                    matched.coordinate.as_tuple(),
                    &"block was written more than once",
                ));
            }

            imageops::replace(
                &mut canvas,
                matched.tile.pixels(),
                i64::from(matched.coordinate.x),
                i64::from(matched.coordinate.y),
            );
            if let Some(count) = tile_usage.get_mut(matched.tile_index) {
                *count += 1;
            }
            diagnostics.block_applied(matched.coordinate);
        }
        Ok(())
    })?;

    if let Some(&first) = coverage.missing().first() {
        return Err(block_error(
            first.as_tuple(),
            &format!("{coverage} after all workers finished"),
        ));
    }

    Ok(Composition { canvas, tile_usage })
}

fn worker_pool(workers: Option<NonZeroUsize>) -> Result<rayon::ThreadPool> {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|index| format!("mosaic-worker-{index}"));
    if let Some(workers) = workers {
        builder = builder.num_threads(workers.get());
    }
    builder.build().map_err(|error| MosaicError::WorkerPool {
        reason: error.to_string(),
    })
}
