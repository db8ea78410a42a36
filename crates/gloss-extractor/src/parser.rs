//! Parse free-form model output into metadata fields
//!
//! Model output is often a JSON object wrapped in commentary. The scan is
//! deliberately loose: take everything from the first `{` to the last `}`
//! and hand it to the JSON decoder. Anything that fails along the way
//! degrades into the fallback record; this function never errors.

use crate::types::ParsedFields;
use gloss_domain::NoteStatus;
use serde_json::{Map, Value};
use tracing::debug;

/// Parse raw model output into the four extracted fields
pub fn parse_response(raw: &str) -> ParsedFields {
    let Some(json_str) = find_json_object(raw) else {
        debug!("No JSON object found in model response");
        debug!("Raw response: {}", raw);
        return ParsedFields::fallback();
    };

    let decoded: Value = match serde_json::from_str(json_str) {
        Ok(value) => value,
        Err(e) => {
            debug!("Error parsing model response: {}", e);
            debug!("Raw response: {}", raw);
            return ParsedFields::fallback();
        }
    };

    let Some(fields) = decoded.as_object() else {
        debug!("Model response is valid JSON but not an object");
        debug!("Raw response: {}", raw);
        return ParsedFields::fallback();
    };

    ParsedFields {
        summary: str_field(fields, "summary"),
        context: str_field(fields, "context"),
        next_actions: list_field(fields, "next_actions"),
        key_concepts: list_field(fields, "key_concepts"),
        status: NoteStatus::Active,
    }
}

/// Slice from the first `{` to the last `}`, inclusive
fn find_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

fn str_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
