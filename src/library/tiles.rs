//! Tile loading and the tile library
//!
//! Every supported image in the tile directory is decoded, normalized to RGB,
//! resized to exactly one block and summarized to its mean color. Files that
//! fail are reported to the diagnostics sink and skipped; an empty result is
//! returned rather than treated as an error so the caller decides how to abort.

use crate::color::{Color, summarize};
use crate::io::configuration::{SUPPORTED_EXTENSIONS, TILE_RESIZE_FILTER};
use crate::io::diagnostics::Diagnostics;
use crate::io::error::{MosaicError, Result};
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageReader, RgbImage, imageops};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// A resized candidate image paired with its mean color
#[derive(Debug, Clone)]
pub struct Tile {
    source: PathBuf,
    pixels: RgbImage,
    color: Color,
}

impl Tile {
    /// Prepare a decoded image as a tile for `block_size` blocks
    ///
    /// The image is converted to RGB and scaled non-uniformly to exactly
    /// `block_size` × `block_size` before its color is computed.
    ///
    /// # Errors
    ///
    /// Returns `TileLoad` if the source image has no pixels
    pub fn from_image(source: PathBuf, image: &DynamicImage, block_size: NonZeroU32) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(MosaicError::TileLoad {
                path: source,
                source: ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )),
            });
        }

        let size = block_size.get();
        let pixels = imageops::resize(&image.to_rgb8(), size, size, TILE_RESIZE_FILTER);
        Self::from_pixels(source, pixels)
    }

    /// Wrap an already-sized pixel grid as a tile
    ///
    /// # Errors
    ///
    /// Returns `TileLoad` if the grid has no pixels
    pub fn from_pixels(source: PathBuf, pixels: RgbImage) -> Result<Self> {
        let Some(color) = summarize(&pixels) else {
            return Err(MosaicError::TileLoad {
                path: source,
                source: ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )),
            });
        };

        Ok(Self {
            source,
            pixels,
            color,
        })
    }

    /// Decode `path` and prepare it as a tile
    ///
    /// The format is guessed from the file contents, falling back to the
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `TileLoad` if the file cannot be decoded or has no pixels
    pub fn load(path: &Path, block_size: NonZeroU32) -> Result<Self> {
        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|source| MosaicError::TileLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_image(path.to_path_buf(), &image, block_size)
    }

    /// File the tile was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resized pixel data
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Mean color of the resized pixels
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Ordered, read-only collection of tiles sharing one block size
///
/// Order only matters for tie-breaking during matching: earlier tiles win.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
    block_size: NonZeroU32,
}

impl TileLibrary {
    /// Build a library from prepared tiles, keeping their order
    pub const fn from_tiles(tiles: Vec<Tile>, block_size: NonZeroU32) -> Self {
        Self { tiles, block_size }
    }

    /// Load every supported image in `directory`
    ///
    /// Candidates are visited sorted by file name. A directory that cannot be
    /// read yields an empty library after reporting the failure.
    pub fn load(directory: &Path, block_size: NonZeroU32, diagnostics: &dyn Diagnostics) -> Self {
        let candidates = match candidate_files(directory) {
            Ok(candidates) => candidates,
            Err(error) => {
                diagnostics.library_unreadable(directory, &error);
                return Self::from_tiles(Vec::new(), block_size);
            }
        };

        diagnostics.library_scanned(directory, candidates.len());

        let mut tiles = Vec::with_capacity(candidates.len());
        for path in candidates {
            match Tile::load(&path, block_size) {
                Ok(tile) => {
                    diagnostics.tile_loaded(&path);
                    tiles.push(tile);
                }
                Err(error) => diagnostics.tile_skipped(&path, &error),
            }
        }

        Self::from_tiles(tiles, block_size)
    }

    /// Tiles in library order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `index` in library order
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if no tile was loaded
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Edge length every tile was resized to
    pub const fn block_size(&self) -> NonZeroU32 {
        self.block_size
    }
}

/// Check whether the file name of `path` ends in a supported image extension
///
/// The whole name is matched, so a bare `.png` counts even though
/// [`Path::extension`] treats it as having none.
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, extension)| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(extension))
        })
}

/// List regular files in `directory` with supported extensions, sorted by path
///
/// Subdirectories are ignored even when their names look like images.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read
pub fn candidate_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read tile directory",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
