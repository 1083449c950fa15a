//! Input/output operations, configuration and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG and data URI encoding
pub mod image;
/// Batch progress display
pub mod progress;
