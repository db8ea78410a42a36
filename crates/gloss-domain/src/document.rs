//! Document module - a note split into frontmatter and body

use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// Ordered key/value header of a note
///
/// Frontmatter is a loosely-typed property bag. The pipeline manages eight
/// keys (see [`crate::metadata::keys`]); everything else passes through a
/// rewrite unchanged and in its original relative order. Overwriting an
/// existing key keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    /// Create an empty frontmatter
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    /// Wrap an existing YAML mapping
    pub fn from_mapping(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Borrow the underlying mapping (for serialization)
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&Value::String(key.to_string()))
    }

    /// Get a value by key if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Insert or overwrite a value, keeping an existing key's position
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(Value::String(key.to_string()), value);
    }

    /// Whether the header has no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys in the header
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate string keys in header order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }
}

/// A note on disk: storage path, frontmatter header, and body text
///
/// The header and body are ownership-disjoint. The body is opaque to the
/// pipeline except for word-counting and link-scanning, and must survive a
/// rewrite byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Storage path identifying the note
    pub path: PathBuf,

    /// Header key/value pairs
    pub frontmatter: Frontmatter,

    /// Body text, never mutated by the pipeline
    pub body: String,
}

impl Document {
    /// Create a document from its parts
    pub fn new(path: impl Into<PathBuf>, frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            frontmatter,
            body: body.into(),
        }
    }

    /// Whitespace-token count of the body
    ///
    /// Recomputed from the current body on every processing run,
    /// independent of header state.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}
