//! Terminal progress display for tile loading and block composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::diagnostics::Diagnostics;
use crate::io::error::MosaicError;
use crate::mosaic::grid::BlockCoordinate;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::{LazyLock, OnceLock};

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:<10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{elapsed_precise}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bars for the two long-running phases of a run
///
/// Each bar appears when its phase starts. Skipped tiles and an unreadable
/// tile directory are printed above the bars and forwarded to `tracing` at
/// debug level.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    loading_bar: OnceLock<ProgressBar>,
    composing_bar: OnceLock<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            loading_bar: OnceLock::new(),
            composing_bar: OnceLock::new(),
        }
    }

    fn start_phase(&self, slot: &OnceLock<ProgressBar>, message: &'static str, length: usize) {
        let bar = slot.get_or_init(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(PHASE_STYLE.clone());
            bar.set_message(message);
            self.multi_progress.add(bar)
        });
        bar.set_length(length as u64);
        bar.set_position(0);
    }

    /// Mark both phases finished and remove the bars
    pub fn finish(&self) {
        for bar in [self.loading_bar.get(), self.composing_bar.get()]
            .into_iter()
            .flatten()
        {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    /// Position of the loading bar, if loading has started
    pub fn tiles_processed(&self) -> Option<u64> {
        self.loading_bar.get().map(ProgressBar::position)
    }

    /// Position of the composing bar, if composition has started
    pub fn blocks_processed(&self) -> Option<u64> {
        self.composing_bar.get().map(ProgressBar::position)
    }
}

impl Diagnostics for ProgressManager {
    fn tile_skipped(&self, path: &Path, error: &MosaicError) {
        tracing::debug!(path = %path.display(), %error, "Skipping tile");
        let _ = self
            .multi_progress
            .println(format!("Failed to load {}: {error}", path.display()));
        if let Some(bar) = self.loading_bar.get() {
            bar.inc(1);
        }
    }

    fn library_unreadable(&self, directory: &Path, error: &MosaicError) {
        tracing::debug!(directory = %directory.display(), %error, "Tile directory unreadable");
        let _ = self.multi_progress.println(format!(
            "Cannot read tile directory {}: {error}",
            directory.display()
        ));
    }

    fn library_scanned(&self, _directory: &Path, candidates: usize) {
        self.start_phase(&self.loading_bar, "Tiles", candidates);
    }

    fn tile_loaded(&self, _path: &Path) {
        if let Some(bar) = self.loading_bar.get() {
            bar.inc(1);
        }
    }

    fn blocks_dispatched(&self, total: usize) {
        if let Some(bar) = self.loading_bar.get() {
            bar.finish();
        }
        self.start_phase(&self.composing_bar, "Blocks", total);
    }

    fn block_applied(&self, _coordinate: BlockCoordinate) {
        if let Some(bar) = self.composing_bar.get() {
            bar.inc(1);
        }
    }
}
