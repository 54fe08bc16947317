use crate::mosaic::grid::{BlockCoordinate, grid_shape};
use bitvec::prelude::*;
use std::fmt;
use std::num::NonZeroU32;

/// Record of which canvas blocks have been written
///
/// Blocks partition the canvas, so a complete coverage with no repeated
/// writes means every pixel was written exactly once.
#[derive(Clone, Debug)]
pub struct BlockCoverage {
    bits: BitVec,
    columns: u32,
    block_size: NonZeroU32,
}

impl BlockCoverage {
    /// Create an empty coverage map for a `width` × `height` canvas
    pub fn new(width: u32, height: u32, block_size: NonZeroU32) -> Self {
        let (columns, rows) = grid_shape(width, height, block_size);
        Self {
            bits: bitvec![0; columns as usize * rows as usize],
            columns,
            block_size,
        }
    }

    /// Mark the block at `coordinate` as written
    ///
    /// Returns `false` if the coordinate is off the block grid, outside the
    /// canvas, or was already marked.
    pub fn mark(&mut self, coordinate: BlockCoordinate) -> bool {
        let size = self.block_size.get();
        if coordinate.x % size != 0 || coordinate.y % size != 0 || coordinate.x / size >= self.columns {
            return false;
        }

        let index = coordinate.block_index(self.block_size, self.columns);
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Test if the block at `coordinate` has been written
    pub fn contains(&self, coordinate: BlockCoordinate) -> bool {
        let size = self.block_size.get();
        if coordinate.x / size >= self.columns {
            return false;
        }
        let index = coordinate.block_index(self.block_size, self.columns);
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of blocks written
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Total number of blocks on the canvas
    pub fn total(&self) -> usize {
        self.bits.len()
    }

    /// Test if every block has been written
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Coordinates of blocks not yet written, in row-major order
    pub fn missing(&self) -> Vec<BlockCoordinate> {
        let size = self.block_size.get();
        let columns = self.columns.max(1) as usize;
        self.bits
            .iter_zeros()
            .map(|index| {
                BlockCoordinate::new(
                    (index % columns) as u32 * size,
                    (index / columns) as u32 * size,
                )
            })
            .collect()
    }
}

impl fmt::Display for BlockCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockCoverage({}/{} blocks)", self.count(), self.total())
    }
}
