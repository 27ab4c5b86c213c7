//! Wire models for the trace-search API.
//!
//! Field names follow the backend's JSON casing; only the subset the engine
//! consumes is modeled. Unknown fields are ignored on deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Top-level search response: `{"data": [ ...traces ]}`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawTrace>,
}

/// A trace as returned by the search endpoint.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrace {
    #[serde(rename = "traceID")]
    pub trace_id: String,

    #[serde(default)]
    pub spans: Vec<RawSpan>,

    /// Process identifier → producing service instance.
    #[serde(default)]
    pub processes: HashMap<String, Process>,
}

/// A single timed operation within a trace.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpan {
    #[serde(rename = "spanID")]
    pub span_id: String,

    pub operation_name: String,

    #[serde(rename = "processID", default)]
    pub process_id: String,

    /// Microseconds since the unix epoch.
    pub start_time: u64,

    /// Microseconds.
    pub duration: u64,

    #[serde(default)]
    pub tags: Vec<SpanTag>,
}

/// The service instance a group of spans was produced by.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub service_name: String,
}

/// Free-form span metadata. Values are arbitrary JSON scalars on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanTag {
    pub key: String,
    pub value: JsonValue,
}

impl SpanTag {
    /// Render the value for tabular output. Strings pass through; any other
    /// scalar keeps its JSON text.
    pub fn value_text(&self) -> String {
        match &self.value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
