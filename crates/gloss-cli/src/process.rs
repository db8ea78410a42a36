//! The per-file processing loop.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::files;
use gloss_extractor::{ExtractorConfig, NoteEnricher, ProcessOutcome};
use gloss_llm::OllamaProvider;
use gloss_store::FileStore;
use tracing::{debug, error};

/// Execute one run over the requested path.
///
/// Directory batches isolate per-note failures: a note that errors is
/// logged and the run continues, but the run as a whole still fails if
/// any note did. A single-file invocation propagates its error
/// immediately.
pub async fn execute_process(args: Cli) -> Result<()> {
    let config = ExtractorConfig {
        skip_recent_days: args.skip_recent,
        ..ExtractorConfig::default()
    };
    config.validate().map_err(CliError::InvalidInput)?;

    debug!(
        "Processing {} from {}",
        if args.recursive { "recursively" } else { "non-recursively" },
        args.path.display()
    );
    if let Some(days) = args.skip_recent {
        debug!("Skipping notes processed within {} days", days);
    }

    let single_file = args.path.is_file();
    let notes = files::discover(&args.path, args.recursive)?;

    let provider = OllamaProvider::new(&args.endpoint, &args.model);
    let enricher =
        NoteEnricher::new(provider, FileStore::new(), config).with_model_name(&args.model);

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for note in &notes {
        debug!("Processing file: {}", note.display());
        match enricher.process_note(note).await {
            Ok(ProcessOutcome::Processed(report)) => {
                processed += 1;
                debug!(
                    "Wrote metadata for {}: status={}, {} words, {} links, {} ms",
                    note.display(),
                    report.status,
                    report.word_count,
                    report.link_count,
                    report.processing_time_ms
                );
            }
            Ok(ProcessOutcome::Skipped) => {
                skipped += 1;
            }
            Err(e) if single_file => return Err(e.into()),
            Err(e) => {
                error!("Failed to process {}: {}", note.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "Processed {} note(s) ({} skipped, {} failed)",
        processed, skipped, failed
    );

    if failed > 0 {
        return Err(CliError::Partial { failed });
    }
    Ok(())
}
