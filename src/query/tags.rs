//! Tag canonicalization.
//!
//! # Responsibilities
//! - Validate "key=value" entries against the accepted character set
//! - Reduce the entry list to a last-wins key→value map
//! - Serialize the map to the JSON object string the backend expects

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Accepted shape of a tag filter entry. Keys and values are limited to
/// alphanumerics plus `.`, `_` and `-`, so an entry contains exactly one `=`.
const TAG_ENTRY_PATTERN: &str = "^[A-Za-z0-9._-]+=[A-Za-z0-9._-]+$";

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAG_ENTRY_PATTERN).expect("tag entry pattern compiles"))
}

/// Whether a raw tag entry is well-formed.
pub fn is_valid_entry(entry: &str) -> bool {
    tag_regex().is_match(entry)
}

/// Reduce tag entries to a key→value map. Later entries overwrite earlier
/// ones. Entries without a `=` are skipped; callers are expected to have
/// validated the list already.
pub fn tag_map(entries: &[String]) -> Map<String, Value> {
    let mut map = Map::new();
    for entry in entries {
        if let Some((key, value)) = entry.split_once('=') {
            map.insert(
                key.trim().to_string(),
                Value::String(value.trim().to_string()),
            );
        }
    }
    map
}

/// Serialize the tag map for the `tags` request parameter. Always an object,
/// `"{}"` when no tags are set.
pub fn tags_parameter(entries: &[String]) -> String {
    Value::Object(tag_map(entries)).to_string()
}
