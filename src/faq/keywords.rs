//! Keyword normalization at the store boundary.
//!
//! Stored keyword data shows up in several shapes: a JSON-encoded array
//! string (`["退貨","退款"]`), a plain comma-separated string
//! (`退貨, 退款`), or an already structured list. Everything is reduced to
//! a `Vec<String>` here so the selector only ever sees decoded keywords.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    #[error("Keyword data is not a list of strings: {0}")]
    Malformed(String),
}

/// Decode raw keyword text.
///
/// Valid JSON must be an array of strings. Anything that is not JSON at all
/// is treated as a comma-separated list. Blank items are dropped.
pub fn decode_keywords(raw: &str) -> Result<Vec<String>, KeywordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => keywords_from_value(value),
        Err(_) => Ok(clean(trimmed.split(','))),
    }
}

/// Like [`decode_keywords`], but malformed data yields an empty list.
pub fn normalize_keywords(raw: &str) -> Vec<String> {
    decode_keywords(raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring malformed keyword data");
        Vec::new()
    })
}

fn keywords_from_value(value: Value) -> Result<Vec<String>, KeywordError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => {
            let mut keywords = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => keywords.push(s),
                    other => return Err(KeywordError::Malformed(other.to_string())),
                }
            }
            Ok(clean(keywords.iter().map(String::as_str)))
        }
        // A JSON string literal holding the encoded list, e.g. a double-encoded column.
        Value::String(inner) => decode_keywords(&inner),
        other => Err(KeywordError::Malformed(other.to_string())),
    }
}

fn clean<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// serde hook for `FaqEntry::keywords`: accepts a list, an encoded string or null.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let keywords = match value {
        Value::String(raw) => normalize_keywords(&raw),
        other => keywords_from_value(other).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring malformed keyword data");
            Vec::new()
        }),
    };
    Ok(keywords)
}

/// Trim and drop blanks; used when accepting keywords from writers.
pub(crate) fn clean_owned(keywords: Vec<String>) -> Vec<String> {
    clean(keywords.iter().map(String::as_str))
}
