//! Gloss CLI library.
//!
//! Provides the command-line surface for the Gloss note-enrichment
//! pipeline: argument parsing, candidate file discovery, and the per-file
//! processing loop.

pub mod cli;
pub mod error;
pub mod files;
pub mod process;

pub use cli::Cli;
pub use error::{CliError, Result};
