//! Mosaic assembly: block decomposition, matching and orchestration
//!
//! This module contains:
//! - Cropping and row-major block enumeration
//! - Per-block summarization and matching
//! - Coverage tracking for the output canvas
//! - The parallel build pipeline

/// Per-block extraction and matching
pub mod block;
/// Pipeline orchestration and worker pool
pub mod builder;
/// Written-block bookkeeping for the output canvas
pub mod coverage;
/// Cropping and block coordinate enumeration
pub mod grid;

pub use builder::{MosaicConfig, MosaicSummary, build, compose};
pub use grid::BlockCoordinate;
