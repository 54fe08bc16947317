//! Matching of a single target block

use crate::color::summarize;
use crate::io::error::{Result, block_error};
use crate::library::matcher::best_match;
use crate::library::tiles::{Tile, TileLibrary};
use crate::mosaic::grid::BlockCoordinate;
use image::{RgbImage, imageops};
use std::num::NonZeroU32;

/// The tile selected for one block, keyed by the block's position
#[derive(Debug, Clone, Copy)]
pub struct BlockMatch<'a> {
    /// Top-left pixel of the block in the target
    pub coordinate: BlockCoordinate,
    /// Position of the tile in library order
    pub tile_index: usize,
    /// The tile to paste at `coordinate`
    pub tile: &'a Tile,
}

/// Summarize the block of `target` anchored at `coordinate` and match it
///
/// Reads only shared state, so distinct blocks can be processed concurrently.
///
/// # Errors
///
/// Returns `BlockProcessing` if the block does not fit inside `target` or the
/// library is empty
pub fn process_block<'a>(
    coordinate: BlockCoordinate,
    target: &RgbImage,
    block_size: NonZeroU32,
    library: &'a TileLibrary,
) -> Result<BlockMatch<'a>> {
    let size = block_size.get();
    let fits = coordinate
        .x
        .checked_add(size)
        .zip(coordinate.y.checked_add(size))
        .is_some_and(|(right, bottom)| right <= target.width() && bottom <= target.height());
    if !fits {
        return Err(block_error(
            coordinate.as_tuple(),
            &format!(
                "block of size {size} exceeds target bounds {}x{}",
                target.width(),
                target.height()
            ),
        ));
    }

    let block = imageops::crop_imm(target, coordinate.x, coordinate.y, size, size);
    let color = summarize(&*block)
        .ok_or_else(|| block_error(coordinate.as_tuple(), &"block contains no pixels"))?;

    let matched = best_match(color, library)
        .ok_or_else(|| block_error(coordinate.as_tuple(), &"tile library is empty"))?;

    Ok(BlockMatch {
        coordinate,
        tile_index: matched.index,
        tile: matched.tile,
    })
}
