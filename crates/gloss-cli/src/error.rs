//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Requested path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pipeline error while processing a note
    #[error("{0}")]
    Extractor(#[from] gloss_extractor::ExtractorError),

    /// Some notes in a batch failed to process
    #[error("{failed} note(s) failed to process")]
    Partial {
        /// How many notes failed
        failed: usize,
    },
}
