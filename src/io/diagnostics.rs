//! Diagnostics sinks for library loading and mosaic assembly
//!
//! Components never log through global state; they receive a `&dyn Diagnostics`
//! and report what happened. The default sink forwards to `tracing`, the
//! progress sink drives terminal bars, and the collecting sink keeps skipped
//! tiles in memory for inspection.

use crate::io::error::MosaicError;
use crate::mosaic::grid::BlockCoordinate;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Receiver for events raised while building a mosaic
///
/// Both failure events must be handled; the milestones default to no-ops.
pub trait Diagnostics: Sync {
    /// A tile source was rejected and left out of the library
    fn tile_skipped(&self, path: &Path, error: &MosaicError);

    /// The tile directory itself could not be listed, so no tile was tried
    fn library_unreadable(&self, directory: &Path, error: &MosaicError);

    /// The tile directory was scanned and `candidates` files will be loaded
    fn library_scanned(&self, _directory: &Path, _candidates: usize) {}

    /// One tile was added to the library
    fn tile_loaded(&self, _path: &Path) {}

    /// Block processing started for `total` blocks
    fn blocks_dispatched(&self, _total: usize) {}

    /// A matched tile was pasted into the canvas
    fn block_applied(&self, _coordinate: BlockCoordinate) {}
}

/// Sink that emits structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn tile_skipped(&self, path: &Path, error: &MosaicError) {
        tracing::warn!(path = %path.display(), %error, "Skipping tile");
    }

    fn library_unreadable(&self, directory: &Path, error: &MosaicError) {
        tracing::warn!(directory = %directory.display(), %error, "Tile directory unreadable");
    }

    fn library_scanned(&self, directory: &Path, candidates: usize) {
        tracing::info!(directory = %directory.display(), candidates, "Loading tile images");
    }

    fn tile_loaded(&self, path: &Path) {
        tracing::trace!(path = %path.display(), "Tile loaded");
    }

    fn blocks_dispatched(&self, total: usize) {
        tracing::info!(blocks = total, "Processing image blocks");
    }

    fn block_applied(&self, coordinate: BlockCoordinate) {
        tracing::trace!(x = coordinate.x, y = coordinate.y, "Block applied");
    }
}

/// A path that was left out of the library, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTile {
    /// Path of the rejected file or directory
    pub path: PathBuf,
    /// Rendered error message
    pub reason: String,
}

/// Sink that records skipped tiles and counts milestones
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    skipped: Mutex<Vec<SkippedTile>>,
    unreadable: Mutex<Vec<SkippedTile>>,
    loaded: Mutex<Vec<PathBuf>>,
    applied: Mutex<Vec<BlockCoordinate>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles rejected so far, in report order
    pub fn skipped(&self) -> Vec<SkippedTile> {
        self.skipped
            .lock()
            .map(|skipped| skipped.clone())
            .unwrap_or_default()
    }

    /// Tile directories that could not be listed
    pub fn unreadable(&self) -> Vec<SkippedTile> {
        self.unreadable
            .lock()
            .map(|unreadable| unreadable.clone())
            .unwrap_or_default()
    }

    /// Tiles loaded so far, in load order
    pub fn loaded(&self) -> Vec<PathBuf> {
        self.loaded
            .lock()
            .map(|loaded| loaded.clone())
            .unwrap_or_default()
    }

    /// Block coordinates applied to the canvas, in completion order
    pub fn applied(&self) -> Vec<BlockCoordinate> {
        self.applied
            .lock()
            .map(|applied| applied.clone())
            .unwrap_or_default()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn tile_skipped(&self, path: &Path, error: &MosaicError) {
        if let Ok(mut skipped) = self.skipped.lock() {
            skipped.push(SkippedTile {
                path: path.to_path_buf(),
                reason: error.to_string(),
            });
        }
    }

    fn library_unreadable(&self, directory: &Path, error: &MosaicError) {
        if let Ok(mut unreadable) = self.unreadable.lock() {
            unreadable.push(SkippedTile {
                path: directory.to_path_buf(),
                reason: error.to_string(),
            });
        }
    }

    fn tile_loaded(&self, path: &Path) {
        if let Ok(mut loaded) = self.loaded.lock() {
            loaded.push(path.to_path_buf());
        }
    }

    fn block_applied(&self, coordinate: BlockCoordinate) {
        if let Ok(mut applied) = self.applied.lock() {
            applied.push(coordinate);
        }
    }
}
