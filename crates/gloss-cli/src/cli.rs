//! CLI argument definitions and parsing.

use clap::Parser;
use gloss_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use std::path::PathBuf;

/// Gloss - enrich markdown notes with model-derived metadata.
#[derive(Debug, Parser)]
#[command(name = "gloss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Markdown file or directory of notes to process
    pub path: PathBuf,

    /// Process directory contents recursively
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only process the directory's immediate files (default)
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Ollama model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Ollama API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Show processing details
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip notes processed within N days
    #[arg(long, value_name = "DAYS")]
    pub skip_recent: Option<i64>,
}
