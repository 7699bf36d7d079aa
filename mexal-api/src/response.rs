//! Server response types and record coercion.
//!
//! Mexal list responses follow a common envelope format: a `dati` array
//! holding the payload records and an optional `next` cursor signaling
//! that more pages exist. Single-resource lookups return a bare object
//! instead of the envelope.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A single result record: field name to stringified value.
///
/// Field sets are determined by the server and vary by endpoint; callers
/// can narrow them with a `fields=` property list.
pub type Record = BTreeMap<String, String>;

/// Standard list response envelope.
///
/// ```json
/// { "dati": [ { ... }, ... ], "next": "opaque-cursor" }
/// ```
///
/// `dati` is mandatory; a body without it fails to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Result payload records.
    pub dati: Vec<Value>,
    /// Pagination cursor, present only when more records exist.
    #[serde(default)]
    pub next: Option<String>,
}

impl Envelope {
    /// Whether more pages exist for the current query.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Coerce the payload into records.
    pub fn records(&self) -> Vec<Record> {
        self.dati.iter().map(record_from_value).collect()
    }
}

/// Coerce a JSON value to its string representation.
///
/// Strings are taken verbatim; any other value is rendered as its JSON
/// text (`true`, `42`, `null`, ...).
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce a JSON object into a [`Record`].
///
/// Non-object values yield an empty record.
pub fn record_from_value(value: &Value) -> Record {
    match value.as_object() {
        Some(map) => map.iter().map(|(k, v)| (k.clone(), coerce(v))).collect(),
        None => Record::new(),
    }
}
