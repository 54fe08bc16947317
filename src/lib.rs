//! Photomosaic generation by average-color tile matching
//!
//! A target photograph is cropped to whole blocks, each block is summarized to
//! its mean color, and every block is replaced by the library tile whose mean
//! color is closest. Blocks are matched in parallel and pasted into the output
//! canvas as results arrive.

#![forbid(unsafe_code)]

/// Mean-color summarization of pixel grids
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Tile library loading and nearest-color matching
pub mod library;
/// Block decomposition and mosaic assembly
pub mod mosaic;

pub use io::error::{MosaicError, Result};
