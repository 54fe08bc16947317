//! Tests for canvas block coverage tracking

#[cfg(test)]
mod tests {
    use photomosaic::mosaic::coverage::BlockCoverage;
    use photomosaic::mosaic::grid::{BlockCoordinate, block_coordinates};
    use std::num::NonZeroU32;

    fn block(size: u32) -> NonZeroU32 {
        NonZeroU32::new(size).unwrap_or(NonZeroU32::MIN)
    }

    // Tests a new coverage map has nothing written
    #[test]
    fn test_new_coverage_empty() {
        let coverage = BlockCoverage::new(10, 5, block(5));
        assert_eq!(coverage.total(), 2);
        assert_eq!(coverage.count(), 0);
        assert!(!coverage.is_complete());
    }

    // Tests marking each block once completes the coverage
    #[test]
    fn test_mark_all_blocks() {
        let mut coverage = BlockCoverage::new(15, 10, block(5));
        for coordinate in block_coordinates(15, 10, block(5)) {
            assert!(coverage.mark(coordinate));
            assert!(coverage.contains(coordinate));
        }
        assert!(coverage.is_complete());
        assert!(coverage.missing().is_empty());
    }

    // Tests a second write to the same block is rejected
    #[test]
    fn test_mark_twice_rejected() {
        let mut coverage = BlockCoverage::new(10, 10, block(5));
        assert!(coverage.mark(BlockCoordinate::new(5, 0)));
        assert!(!coverage.mark(BlockCoordinate::new(5, 0)));
        assert_eq!(coverage.count(), 1);
    }

    // Tests misaligned and out-of-canvas coordinates are rejected
    #[test]
    fn test_mark_invalid_coordinates() {
        let mut coverage = BlockCoverage::new(10, 10, block(5));
        assert!(!coverage.mark(BlockCoordinate::new(3, 0)));
        assert!(!coverage.mark(BlockCoordinate::new(10, 0)));
        assert!(!coverage.mark(BlockCoordinate::new(0, 10)));
        assert_eq!(coverage.count(), 0);
    }

    // Tests missing blocks are reported in row-major order
    #[test]
    fn test_missing_blocks() {
        let mut coverage = BlockCoverage::new(10, 10, block(5));
        coverage.mark(BlockCoordinate::new(0, 0));
        coverage.mark(BlockCoordinate::new(0, 5));

        assert_eq!(
            coverage.missing(),
            vec![BlockCoordinate::new(5, 0), BlockCoordinate::new(5, 5)]
        );
        assert_eq!(coverage.to_string(), "BlockCoverage(2/4 blocks)");
    }
}
