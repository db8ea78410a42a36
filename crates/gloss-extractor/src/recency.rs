//! Recency gate - decides whether a note is stale enough to reprocess

use chrono::{DateTime, Duration, Utc};
use gloss_domain::{keys, Frontmatter};
use tracing::debug;

/// Decides, from a note's existing header, whether to run the pipeline
///
/// Never-processed notes are always eligible, and an unparsable prior
/// timestamp fails open: broken metadata is grounds for reprocessing,
/// not for skipping.
pub struct RecencyGate {
    window_days: Option<i64>,
}

impl RecencyGate {
    /// Create a gate with an optional skip window in days
    pub fn new(window_days: Option<i64>) -> Self {
        Self { window_days }
    }

    /// Whether the note should be processed this run
    pub fn should_process(&self, frontmatter: &Frontmatter) -> bool {
        let Some(days) = self.window_days else {
            return true;
        };
        let Some(prior) = frontmatter.get_str(keys::LAST_PROCESSED) else {
            return true;
        };

        match DateTime::parse_from_rfc3339(prior) {
            Ok(last_processed) => {
                let cutoff = Utc::now() - Duration::days(days);
                let should_process = last_processed.with_timezone(&Utc) < cutoff;
                if !should_process {
                    debug!(
                        "Skipping recently processed note (last processed: {})",
                        prior
                    );
                }
                should_process
            }
            // Unparsable timestamp: fail open and reprocess
            Err(_) => true,
        }
    }
}
