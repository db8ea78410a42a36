//! Wiki-link extraction from body text

use regex::Regex;
use std::sync::LazyLock;

// Non-greedy: a bracket pair closes at the nearest following ]]
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("wiki-link regex"));

/// Extract all `[[...]]` cross-references from body text
///
/// Targets are trimmed of surrounding whitespace. Duplicates are retained
/// and order is first-seen in the text.
pub fn extract_wiki_links(body: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(body)
        .map(|cap| cap[1].trim().to_string())
        .collect()
}
