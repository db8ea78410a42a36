//! End-to-end tests for the enrichment pipeline

#[cfg(test)]
mod tests {
    use crate::{ExtractorConfig, ExtractorError, NoteEnricher, ProcessOutcome};
    use chrono::DateTime;
    use gloss_domain::traits::DocumentStore;
    use gloss_domain::{keys, NoteStatus};
    use gloss_llm::MockProvider;
    use gloss_store::FileStore;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const NOTE: &str =
        "---\ntitle: Sync\n---\n\nMeet [[Alice]] about [[Project X]]. TODO: send notes.\n";

    const WRAPPED_RESPONSE: &str = r#"Sure! {"summary": "Meeting recap", "context": "work", "next_actions": ["send notes"], "key_concepts": ["Project X"]} Thanks!"#;

    fn write_note(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn enricher_with(
        provider: MockProvider,
        config: ExtractorConfig,
    ) -> NoteEnricher<MockProvider, FileStore> {
        NoteEnricher::new(provider, FileStore::new(), config).with_model_name("mock")
    }

    fn sequence_field(path: &Path, key: &str) -> Vec<String> {
        let document = FileStore::new().load(path).unwrap();
        document
            .frontmatter
            .get(key)
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_full_enrichment_flow() {
        let dir = TempDir::new().unwrap();
        let path = write_note(&dir, "sync.md", NOTE);

        let enricher = enricher_with(
            MockProvider::new(WRAPPED_RESPONSE),
            ExtractorConfig::default(),
        );
        let outcome = enricher.process_note(&path).await.unwrap();

        let report = match outcome {
            ProcessOutcome::Processed(report) => report,
            ProcessOutcome::Skipped => panic!("note should not be gated"),
        };
        assert_eq!(report.status, NoteStatus::Active);
        assert_eq!(report.word_count, 8);
        assert_eq!(report.link_count, 2);
        assert_eq!(report.model_name, "mock");

        let document = FileStore::new().load(&path).unwrap();
        // Body untouched, pre-existing header key preserved
        assert_eq!(
            document.body,
            "Meet [[Alice]] about [[Project X]]. TODO: send notes.\n"
        );
        assert_eq!(document.frontmatter.get_str("title"), Some("Sync"));

        // Model-derived fields
        assert_eq!(
            document.frontmatter.get_str(keys::SUMMARY),
            Some("Meeting recap")
        );
        assert_eq!(document.frontmatter.get_str(keys::CONTEXT), Some("work"));
        assert_eq!(sequence_field(&path, keys::NEXT_ACTIONS), vec!["send notes"]);
        assert_eq!(sequence_field(&path, keys::KEY_CONCEPTS), vec!["Project X"]);

        // Derived fields, independent of the model
        assert_eq!(
            sequence_field(&path, keys::LINKS),
            vec!["Alice", "Project X"]
        );
        assert_eq!(
            document
                .frontmatter
                .get(keys::WORD_COUNT)
                .and_then(|v| v.as_u64()),
            Some(8)
        );
        assert_eq!(document.frontmatter.get_str(keys::STATUS), Some("active"));

        let stamp = document.frontmatter.get_str(keys::LAST_PROCESSED).unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_response_degrades_to_error_record() {
        let dir = TempDir::new().unwrap();
        let path = write_note(&dir, "sync.md", NOTE);

        let enricher = enricher_with(
            MockProvider::new("I had some trouble with that note."),
            ExtractorConfig::default(),
        );
        let outcome = enricher.process_note(&path).await.unwrap();

        match outcome {
            ProcessOutcome::Processed(report) => assert_eq!(report.status, NoteStatus::Error),
            ProcessOutcome::Skipped => panic!("note should not be gated"),
        }

        let document = FileStore::new().load(&path).unwrap();
        assert_eq!(
            document.frontmatter.get_str(keys::SUMMARY),
            Some("Error processing content")
        );
        assert_eq!(document.frontmatter.get_str(keys::CONTEXT), Some("unknown"));
        assert_eq!(document.frontmatter.get_str(keys::STATUS), Some("error"));
        assert!(sequence_field(&path, keys::NEXT_ACTIONS).is_empty());

        // Links and word count are still derived from the body
        assert_eq!(
            sequence_field(&path, keys::LINKS),
            vec!["Alice", "Project X"]
        );
        assert_eq!(
            document
                .frontmatter
                .get(keys::WORD_COUNT)
                .and_then(|v| v.as_u64()),
            Some(8)
        );

        // The run is stamped even on failure, so a skip window will hold
        // this note back rather than reprocessing it forever
        assert!(document.frontmatter.get_str(keys::LAST_PROCESSED).is_some());
    }

    #[tokio::test]
    async fn test_skip_window_gates_second_run() {
        let dir = TempDir::new().unwrap();
        let path = write_note(&dir, "sync.md", NOTE);

        let provider = MockProvider::new(WRAPPED_RESPONSE);
        let config = ExtractorConfig {
            skip_recent_days: Some(7),
            ..ExtractorConfig::default()
        };
        let enricher = enricher_with(provider.clone(), config);

        let first = enricher.process_note(&path).await.unwrap();
        assert!(matches!(first, ProcessOutcome::Processed(_)));
        assert_eq!(provider.call_count(), 1);
        let after_first = fs::read_to_string(&path).unwrap();

        let second = enricher.process_note(&path).await.unwrap();
        assert!(matches!(second, ProcessOutcome::Skipped));
        // No model call, no header change
        assert_eq!(provider.call_count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[tokio::test]
    async fn test_unparsable_last_processed_fails_open() {
        let dir = TempDir::new().unwrap();
        let path = write_note(
            &dir,
            "sync.md",
            "---\nlast_processed: who knows\n---\n\nSome body.\n",
        );

        let provider = MockProvider::new(WRAPPED_RESPONSE);
        let config = ExtractorConfig {
            skip_recent_days: Some(7),
            ..ExtractorConfig::default()
        };
        let enricher = enricher_with(provider.clone(), config);

        let outcome = enricher.process_note(&path).await.unwrap();
        assert!(matches!(outcome, ProcessOutcome::Processed(_)));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_note_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let enricher = enricher_with(MockProvider::new("{}"), ExtractorConfig::default());
        let result = enricher.process_note(&path).await;

        match result {
            Err(ExtractorError::Store(message)) => assert!(message.contains("not found")),
            other => panic!("expected store error, got {:?}", other),
        }
    }
}
