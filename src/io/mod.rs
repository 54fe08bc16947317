//! Input/output, configuration and error handling

/// Command-line parsing and the run driver
pub mod cli;
/// Defaults and fixed processing settings
pub mod configuration;
/// Diagnostics sinks for loading and assembly events
pub mod diagnostics;
/// Error types shared by every stage
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress bars
pub mod progress;
