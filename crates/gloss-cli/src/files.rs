//! Candidate note discovery.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Collect the markdown files a run should process.
///
/// A missing path is fatal. A single `.md` file is its own candidate list;
/// any other single file is a silent no-op. For a directory, candidates
/// come from a `*.md` glob (any depth with `recursive`), and matching
/// nothing is not an error.
pub fn discover(path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }

    if path.is_file() {
        if path.extension().and_then(|e| e.to_str()) == Some("md") {
            return Ok(vec![path.to_path_buf()]);
        }
        debug!("Not a markdown file, nothing to do: {}", path.display());
        return Ok(Vec::new());
    }

    let pattern = path.join(if recursive { "**/*.md" } else { "*.md" });
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    let matches = glob::glob(&pattern)
        .map_err(|e| CliError::InvalidInput(format!("Bad glob pattern '{}': {}", pattern, e)))?;
    for entry in matches {
        match entry {
            Ok(file) => files.push(file),
            Err(e) => warn!("Skipping unreadable path: {}", e),
        }
    }
    files.sort();
    Ok(files)
}
