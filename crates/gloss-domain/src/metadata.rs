//! Metadata module - the derived fields the pipeline writes into a header

use crate::document::Frontmatter;
use crate::status::NoteStatus;
use chrono::{DateTime, Utc};
use serde_yaml::Value;

/// Header keys managed by the pipeline
///
/// Exactly these keys are added or overwritten on a write; all other
/// header keys are preserved.
pub mod keys {
    /// Short model-derived summary of the body
    pub const SUMMARY: &str = "summary";
    /// Primary context (personal/work/research, open-ended)
    pub const CONTEXT: &str = "context";
    /// Action items found by the model
    pub const NEXT_ACTIONS: &str = "next_actions";
    /// Key concepts found by the model
    pub const KEY_CONCEPTS: &str = "key_concepts";
    /// RFC 3339 timestamp of the last processing run
    pub const LAST_PROCESSED: &str = "last_processed";
    /// Whitespace-token count of the body
    pub const WORD_COUNT: &str = "word_count";
    /// Wiki-links extracted from the body
    pub const LINKS: &str = "links";
    /// Processing status (active or error)
    pub const STATUS: &str = "status";

    /// All managed keys, in the order they are written
    pub const MANAGED: [&str; 8] = [
        SUMMARY,
        CONTEXT,
        NEXT_ACTIONS,
        KEY_CONCEPTS,
        LAST_PROCESSED,
        WORD_COUNT,
        LINKS,
        STATUS,
    ];
}

/// Metadata derived for one note during one processing run
///
/// Constructed fresh for every processed document, merged into the header,
/// and discarded. The header is the persistence layer; there is no separate
/// metadata store.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteMetadata {
    /// Short model-derived summary
    pub summary: String,

    /// Primary context; any model-returned string is accepted
    pub context: String,

    /// Action items, in model output order
    pub next_actions: Vec<String>,

    /// Key concepts, in model output order
    pub key_concepts: Vec<String>,

    /// Timestamp of this run; always "now", success or failure
    pub last_processed: DateTime<Utc>,

    /// Whitespace-token count of the body at processing time
    pub word_count: usize,

    /// Wiki-links from the body, duplicates preserved, first-seen order
    pub links: Vec<String>,

    /// Outcome of the model-response parse
    pub status: NoteStatus,
}

impl NoteMetadata {
    /// Overlay this record onto a header
    ///
    /// Updates exactly the eight managed keys, overwriting prior values
    /// and leaving every other key untouched. `last_processed` is written
    /// as an RFC 3339 string so a later run's recency gate can parse it.
    pub fn apply_to(&self, frontmatter: &mut Frontmatter) {
        frontmatter.insert(keys::SUMMARY, Value::String(self.summary.clone()));
        frontmatter.insert(keys::CONTEXT, Value::String(self.context.clone()));
        frontmatter.insert(keys::NEXT_ACTIONS, string_sequence(&self.next_actions));
        frontmatter.insert(keys::KEY_CONCEPTS, string_sequence(&self.key_concepts));
        frontmatter.insert(
            keys::LAST_PROCESSED,
            Value::String(self.last_processed.to_rfc3339()),
        );
        frontmatter.insert(
            keys::WORD_COUNT,
            Value::Number(serde_yaml::Number::from(self.word_count as u64)),
        );
        frontmatter.insert(keys::LINKS, string_sequence(&self.links));
        frontmatter.insert(keys::STATUS, Value::String(self.status.as_str().to_string()));
    }
}

fn string_sequence(items: &[String]) -> Value {
    Value::Sequence(items.iter().cloned().map(Value::String).collect())
}
