//! Error types for mosaic construction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode the target image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to decode or prepare a single tile source
    ///
    /// The library loader reports these to its diagnostics sink and carries on
    /// with the remaining files.
    TileLoad {
        /// Path to the tile source file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// No usable tile image was found in the tile directory
    EmptyLibrary {
        /// Directory that was scanned
        directory: PathBuf,
    },

    /// Configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A block could not be matched or placed
    ///
    /// A partial canvas is never written, so any of these aborts the run.
    BlockProcessing {
        /// Top-left pixel of the block as (x, y)
        coordinate: (u32, u32),
        /// Description of the failure
        reason: String,
    },

    /// The worker pool could not be started
    WorkerPool {
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode the mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::EmptyLibrary { directory } => {
                write!(
                    f,
                    "No tile images found in '{}' (expected .jpg, .jpeg or .png files)",
                    directory.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::BlockProcessing { coordinate, reason } => {
                write!(
                    f,
                    "Block at ({}, {}) could not be processed: {reason}",
                    coordinate.0, coordinate.1
                )
            }
            Self::WorkerPool { reason } => {
                write!(f, "Failed to start worker pool: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::TileLoad { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a block processing error
pub fn block_error(coordinate: (u32, u32), reason: &impl ToString) -> MosaicError {
    MosaicError::BlockProcessing {
        coordinate,
        reason: reason.to_string(),
    }
}
