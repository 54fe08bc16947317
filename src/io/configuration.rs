//! Runtime defaults and fixed processing settings

use image::imageops::FilterType;

// Defaults for the four run parameters
/// Default edge length in pixels of each square block and tile
pub const DEFAULT_BLOCK_SIZE: u32 = 5;
/// Default directory holding candidate tile images
pub const DEFAULT_TILE_DIRECTORY: &str = "images_for_mozaika";
/// Default target photograph
pub const DEFAULT_TARGET_IMAGE: &str = "target.jpg";
/// Default output path for the finished mosaic
pub const DEFAULT_OUTPUT_IMAGE: &str = "mosaic_output.jpg";

/// File extensions accepted as tile sources, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// Bicubic, matching common photo-editor defaults for downscaling
/// Filter used when resizing tile sources to the block size
pub const TILE_RESIZE_FILTER: FilterType = FilterType::CatmullRom;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
