//! Block decomposition of the target image
//!
//! The target is cropped to whole blocks and then walked in row-major order.
//! Every block coordinate is the top-left pixel of a `block_size` square that
//! lies fully inside the cropped image, and the blocks partition it exactly.

use image::{RgbImage, imageops};
use std::fmt;
use std::num::NonZeroU32;

/// Top-left pixel position of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockCoordinate {
    /// Horizontal pixel offset
    pub x: u32,
    /// Vertical pixel offset
    pub y: u32,
}

impl BlockCoordinate {
    /// Create a coordinate from pixel offsets
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Coordinate as an `(x, y)` tuple
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Row-major index of this block in a grid `columns` blocks wide
    pub const fn block_index(self, block_size: NonZeroU32, columns: u32) -> usize {
        let size = block_size.get();
        (self.y / size) as usize * columns as usize + (self.x / size) as usize
    }
}

impl fmt::Display for BlockCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Largest dimensions not exceeding `(width, height)` that are exact multiples
/// of `block_size`
pub const fn cropped_dimensions(width: u32, height: u32, block_size: NonZeroU32) -> (u32, u32) {
    let size = block_size.get();
    (width - width % size, height - height % size)
}

/// Number of block columns and rows covering the cropped dimensions
pub const fn grid_shape(width: u32, height: u32, block_size: NonZeroU32) -> (u32, u32) {
    let size = block_size.get();
    (width / size, height / size)
}

/// Total number of blocks for the given image dimensions
pub const fn block_count(width: u32, height: u32, block_size: NonZeroU32) -> usize {
    let (columns, rows) = grid_shape(width, height, block_size);
    columns as usize * rows as usize
}

/// Crop the right and bottom remainder strips so both dimensions are whole
/// multiples of `block_size`
///
/// The discarded strips are intentionally lost.
pub fn crop_to_grid(image: &RgbImage, block_size: NonZeroU32) -> RgbImage {
    let (width, height) = cropped_dimensions(image.width(), image.height(), block_size);
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    imageops::crop_imm(image, 0, 0, width, height).to_image()
}

/// Enumerate block coordinates in row-major order
///
/// Any remainder strip in the input dimensions is skipped, so every yielded
/// block fits inside the cropped image.
pub fn block_coordinates(
    width: u32,
    height: u32,
    block_size: NonZeroU32,
) -> impl Iterator<Item = BlockCoordinate> {
    let (columns, rows) = grid_shape(width, height, block_size);
    let size = block_size.get();
    (0..rows).flat_map(move |row| {
        (0..columns).map(move |column| BlockCoordinate::new(column * size, row * size))
    })
}
