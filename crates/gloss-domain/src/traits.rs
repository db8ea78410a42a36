//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::document::Document;
use std::path::Path;

/// Trait for loading and saving note documents
///
/// Implemented by the infrastructure layer (gloss-store)
pub trait DocumentStore {
    /// Error type for store operations
    type Error;

    /// Load a document, splitting frontmatter from body
    fn load(&self, path: &Path) -> Result<Document, Self::Error>;

    /// Persist a document, reassembling frontmatter and body
    fn save(&mut self, document: &Document) -> Result<(), Self::Error>;
}

/// Trait for language model text generation
///
/// One method, text in and text out. The model service is an opaque
/// collaborator; the pipeline is tested against a deterministic stand-in.
///
/// Implemented by the infrastructure layer (gloss-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a prompt, blocking until done
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
