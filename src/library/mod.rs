//! Tile library construction and color matching

/// Nearest-color tile lookup
pub mod matcher;
/// Tile preparation and directory loading
pub mod tiles;

pub use matcher::{TileMatch, best_match};
pub use tiles::{Tile, TileLibrary};
