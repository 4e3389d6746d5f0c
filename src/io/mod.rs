//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for mosaic generation
pub mod error;
/// PNG loading and export
pub mod image;
/// Progress bar management for batch runs
pub mod progress;
/// Paint-event capture and GIF generation
pub mod visualization;
