//! Color representation and pixel-grid summarization

/// Per-channel mean color of a pixel grid
pub mod summary;

pub use summary::{Color, summarize};
