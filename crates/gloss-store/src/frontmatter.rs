//! Splitting and reassembling the delimited header block
//!
//! A note file is `---`, a YAML mapping, `---`, a blank separator line,
//! then the body. Files without an opening delimiter are all body. The
//! split and render functions are inverses over the body: one separator
//! newline is added on render and removed on split, so the body text is
//! reproduced byte-for-byte across a rewrite.

use gloss_domain::Frontmatter;
use serde_yaml::Mapping;

const OPEN: &str = "---\n";

/// Split a note file into header mapping and body
pub fn split(text: &str) -> Result<(Frontmatter, String), serde_yaml::Error> {
    let Some(rest) = text.strip_prefix(OPEN) else {
        return Ok((Frontmatter::new(), text.to_string()));
    };
    let Some((header, body)) = split_at_close(rest) else {
        // Unterminated header block: treat the whole file as body
        return Ok((Frontmatter::new(), text.to_string()));
    };
    let mapping: Mapping = if header.trim().is_empty() {
        Mapping::new()
    } else {
        serde_yaml::from_str(header)?
    };
    let body = body.strip_prefix('\n').unwrap_or(body);
    Ok((Frontmatter::from_mapping(mapping), body.to_string()))
}

/// Render header and body back into note-file text
pub fn render(frontmatter: &Frontmatter, body: &str) -> Result<String, serde_yaml::Error> {
    let header = serde_yaml::to_string(frontmatter.as_mapping())?;
    Ok(format!("---\n{}---\n\n{}", header, body))
}

/// Find the closing delimiter line; returns (header, raw body after it)
fn split_at_close(rest: &str) -> Option<(&str, &str)> {
    if let Some(body) = rest.strip_prefix("---\n") {
        return Some(("", body));
    }
    if rest == "---" {
        return Some(("", ""));
    }
    if let Some(idx) = rest.find("\n---\n") {
        return Some((&rest[..idx + 1], &rest[idx + 5..]));
    }
    if let Some(header) = rest.strip_suffix("\n---") {
        return Some((header, ""));
    }
    None
}
