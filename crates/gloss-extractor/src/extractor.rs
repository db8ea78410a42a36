//! Core pipeline driver

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::links::extract_wiki_links;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use crate::recency::RecencyGate;
use crate::types::{ProcessOutcome, ProcessReport};
use chrono::Utc;
use gloss_domain::traits::{DocumentStore, LlmProvider};
use gloss_domain::NoteMetadata;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};
use tracing::debug;

/// Runs one note at a time through the full enrichment sequence
///
/// Owns no logic beyond delegation: the gate decides, the builder and
/// parser shape the model exchange, and the store does the splitting and
/// rewriting. Processing is strictly sequential; a note is fully handled
/// before the caller moves to the next.
pub struct NoteEnricher<L, S>
where
    L: LlmProvider,
    S: DocumentStore,
{
    llm_provider: Arc<L>,
    store: Arc<Mutex<S>>,
    gate: RecencyGate,
    config: ExtractorConfig,
    model_name: String,
}

impl<L, S> NoteEnricher<L, S>
where
    L: LlmProvider + Send + Sync + 'static,
    S: DocumentStore,
    L::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
{
    /// Create a new enricher
    pub fn new(llm_provider: L, store: S, config: ExtractorConfig) -> Self {
        let gate = RecencyGate::new(config.skip_recent_days);
        Self {
            llm_provider: Arc::new(llm_provider),
            store: Arc::new(Mutex::new(store)),
            gate,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Record which model name shows up in process reports
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Process one note: read, gate, extract, merge, write back
    ///
    /// Returns `Skipped` when the recency gate holds the note back (no
    /// model call, no write). Otherwise the header is rewritten with a
    /// fresh metadata record; a model response that cannot be parsed still
    /// produces a write, with the record marked `error`. A missing file is
    /// surfaced to the caller as a store error.
    pub async fn process_note(&self, path: &Path) -> Result<ProcessOutcome, ExtractorError> {
        let start_time = SystemTime::now();

        let mut document = {
            let store = self
                .store
                .lock()
                .map_err(|e| ExtractorError::Store(e.to_string()))?;
            store
                .load(path)
                .map_err(|e| ExtractorError::Store(e.to_string()))?
        };

        if !self.gate.should_process(&document.frontmatter) {
            return Ok(ProcessOutcome::Skipped);
        }

        let prompt = PromptBuilder::new(&document.body)
            .with_content_limit(self.config.max_content_chars)
            .build();
        debug!("Prompt length: {} chars", prompt.len());

        let raw_response = self.call_llm(&prompt).await?;
        debug!("Model response length: {} chars", raw_response.len());

        let fields = parse_response(&raw_response);

        // word count, links, and the timestamp come from the document and
        // the clock, never from the model
        let metadata = NoteMetadata {
            summary: fields.summary,
            context: fields.context,
            next_actions: fields.next_actions,
            key_concepts: fields.key_concepts,
            last_processed: Utc::now(),
            word_count: document.word_count(),
            links: extract_wiki_links(&document.body),
            status: fields.status,
        };

        let report = ProcessReport {
            status: metadata.status,
            word_count: metadata.word_count,
            link_count: metadata.links.len(),
            model_name: self.model_name.clone(),
            processing_time_ms: start_time
                .elapsed()
                .unwrap_or(Duration::from_secs(0))
                .as_millis() as u64,
        };

        metadata.apply_to(&mut document.frontmatter);

        {
            let mut store = self
                .store
                .lock()
                .map_err(|e| ExtractorError::Store(e.to_string()))?;
            store
                .save(&document)
                .map_err(|e| ExtractorError::Store(e.to_string()))?;
        }

        debug!(
            "Processed {}: status={}, {} words, {} links",
            path.display(),
            report.status,
            report.word_count,
            report.link_count
        );

        Ok(ProcessOutcome::Processed(report))
    }

    /// Call the LLM provider on a blocking thread
    async fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
