//! Decoding of source images and encoding of the finished mosaic

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Decode any supported raster file without converting its color space
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a raster file and normalize it to 8-bit RGB
///
/// Alpha is dropped and grayscale is expanded to three channels.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    decode(path).map(|image| image.to_rgb8())
}

/// Encode `canvas` to `output_path`, replacing any existing file
///
/// The format is chosen from the file extension. Missing parent directories
/// are created.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension does not name a supported format
/// - The image cannot be written to the specified path
pub fn encode(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    canvas
        .save(output_path)
        .map_err(|source| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
