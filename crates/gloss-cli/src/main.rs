//! Gloss CLI - enrich markdown notes with model-derived metadata.

use clap::Parser;
use gloss_cli::{process, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // -v selects debug-level detail; RUST_LOG overrides either way
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "gloss_cli={level},gloss_extractor={level},gloss_store={level},gloss_llm={level}",
            level = log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = process::execute_process(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
