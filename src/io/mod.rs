//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for generation and file handling
pub mod error;
/// Pixel-block sample loading and PNG rendering
pub mod image;
/// Multi-file progress tracking
pub mod progress;
/// ASCII sample loading and text rendering
pub mod text;
