//! Gloss Storage Layer
//!
//! Implements the `DocumentStore` trait over plain note files. The note
//! file itself is the persistence layer: a delimited YAML header followed
//! by a body of arbitrary text.
//!
//! # Guarantees
//!
//! - The body survives a load/save round trip byte-for-byte.
//! - Header keys the pipeline does not manage are preserved, in their
//!   original relative order.
//! - A save is a single synchronous write-then-close; no transactional
//!   guarantee is made beyond that.
//!
//! # Examples
//!
//! ```no_run
//! use gloss_store::FileStore;
//! use gloss_domain::traits::DocumentStore;
//! use std::path::Path;
//!
//! let store = FileStore::new();
//! let document = store.load(Path::new("notes/todo.md")).unwrap();
//! println!("{} words", document.word_count());
//! ```

#![warn(missing_docs)]

pub mod frontmatter;

use gloss_domain::traits::DocumentStore;
use gloss_domain::Document;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Requested note does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header is not a valid YAML mapping
    #[error("Invalid header: {0}")]
    Header(#[from] serde_yaml::Error),
}

/// File-backed implementation of `DocumentStore`
///
/// Stateless; each call opens the file, does its work, and closes it. No
/// lock is held between a load and a later save of the same note, so a
/// concurrent external modification is last-writer-wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    /// Create a new file store
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FileStore {
    type Error = StoreError;

    fn load(&self, path: &Path) -> Result<Document, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let (frontmatter, body) = frontmatter::split(&text)?;
        Ok(Document::new(path, frontmatter, body))
    }

    fn save(&mut self, document: &Document) -> Result<(), StoreError> {
        let text = frontmatter::render(&document.frontmatter, &document.body)?;
        fs::write(&document.path, text)?;
        Ok(())
    }
}
