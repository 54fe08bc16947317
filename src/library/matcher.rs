//! Nearest-color tile lookup
//!
//! A linear scan over the library. Tile counts stay in the tens to low
//! thousands, where a spatial index buys nothing over a tight loop.

use crate::color::Color;
use crate::library::tiles::{Tile, TileLibrary};

/// The tile chosen for a query color
#[derive(Debug, Clone, Copy)]
pub struct TileMatch<'a> {
    /// Position of the tile in library order
    pub index: usize,
    /// The matched tile
    pub tile: &'a Tile,
    /// Squared color distance between the query and the tile
    pub distance: f64,
}

/// Find the tile whose color has the smallest squared distance to `query`
///
/// The running minimum is only replaced on a strictly smaller distance, so
/// on exact ties the earliest tile in library order wins. Returns `None` only
/// for an empty library.
pub fn best_match(query: Color, library: &TileLibrary) -> Option<TileMatch<'_>> {
    let mut best: Option<TileMatch<'_>> = None;

    for (index, tile) in library.tiles().iter().enumerate() {
        let distance = query.squared_distance(&tile.color());
        let improves = best.as_ref().is_none_or(|current| distance < current.distance);
        if improves {
            best = Some(TileMatch {
                index,
                tile,
                distance,
            });
        }
    }

    best
}
