//! Error types for the enrichment pipeline

use thiserror::Error;

/// Errors that can occur while processing a note
///
/// Malformed model output is not represented here: the parser always
/// produces a record, degraded if necessary. These variants cover the
/// failures that genuinely abort a note.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Document store error (missing file, I/O, bad header)
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
