//! Gloss Extractor
//!
//! Enriches a note with model-derived metadata and writes it back into the
//! note's header.
//!
//! # Overview
//!
//! Each note runs through a fixed sequence: load and split, recency gate,
//! prompt build, model call, tolerant response parse, link extraction, and
//! a merge that rewrites only the managed header keys. Model output is
//! unreliable free text, so the parse step never fails — a malformed
//! response degrades into a fallback record marked `error` instead.
//!
//! # Architecture
//!
//! ```text
//! Note file → RecencyGate → PromptBuilder → LLM → parser → merge → Note file
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use gloss_extractor::{NoteEnricher, ExtractorConfig, ProcessOutcome};
//! use gloss_llm::MockProvider;
//! use gloss_store::FileStore;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"summary": "A note", "context": "work",
//!     "next_actions": [], "key_concepts": []}"#);
//! let config = ExtractorConfig::default();
//!
//! let enricher = NoteEnricher::new(llm, FileStore::new(), config);
//!
//! match enricher.process_note(Path::new("notes/todo.md")).await? {
//!     ProcessOutcome::Skipped => println!("recently processed, skipped"),
//!     ProcessOutcome::Processed(report) => {
//!         println!("{} words, {} links", report.word_count, report.link_count);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod parser;
mod links;
mod recency;
mod extractor;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use types::{ProcessOutcome, ProcessReport};
pub use extractor::NoteEnricher;
