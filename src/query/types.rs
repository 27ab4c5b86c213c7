//! Query types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::tags;

/// Operation value that matches every operation on the service.
pub const OPERATION_WILDCARD: &str = "ALL";

/// Filter for one trace-search query.
///
/// Immutable for the duration of a query. `sanitized` is applied once at the
/// engine boundary so malformed input never reaches parameter construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryFilter {
    /// Service whose spans are requested. Required for execution.
    pub service: String,

    /// Operation name, or "ALL" for no operation constraint.
    pub operation: String,

    /// Tag filters as "key=value" entries.
    pub tags: Vec<String>,

    /// Tag keys surfaced as output columns.
    pub extract_tags: Vec<String>,

    /// Minimum span duration, passed through verbatim (e.g. "100ms").
    pub min_duration: Option<String>,

    /// Maximum span duration, passed through verbatim.
    pub max_duration: Option<String>,

    /// Maximum traces requested per partition from the backend.
    /// A per-request cap, not a cap on the merged result. 0 = omitted.
    pub limit: u32,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            service: String::new(),
            operation: OPERATION_WILDCARD.to_string(),
            tags: Vec::new(),
            extract_tags: Vec::new(),
            min_duration: None,
            max_duration: None,
            limit: 100,
        }
    }
}

impl QueryFilter {
    /// Whether the filter can be executed at all (a service is set).
    pub fn is_runnable(&self) -> bool {
        !self.service.is_empty()
    }

    /// Whether the operation value constrains the query.
    pub fn has_operation(&self) -> bool {
        !self.operation.is_empty() && self.operation != OPERATION_WILDCARD
    }

    /// Copy with malformed tag entries dropped and duplicate extract keys
    /// collapsed to their first declaration.
    pub fn sanitized(&self) -> QueryFilter {
        let mut clean = self.clone();
        clean.tags.retain(|entry| {
            let valid = tags::is_valid_entry(entry);
            if !valid {
                tracing::warn!(entry = %entry, "Dropping malformed tag filter");
            }
            valid
        });

        let mut seen = std::collections::HashSet::new();
        clean.extract_tags.retain(|key| seen.insert(key.clone()));
        clean
    }
}

/// One logical query target. Several targets may arrive in a single
/// dashboard request; each executes independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTarget {
    /// Caller-side identifier echoed on the resulting table.
    #[serde(rename = "refId")]
    pub ref_id: String,

    /// Filter to execute.
    #[serde(flatten)]
    pub filter: QueryFilter,
}

/// How the operation value participates in span selection.
///
/// The backend request always carries the operation parameter when it is not
/// the wildcard; this knob decides whether fetched spans are also checked
/// locally. `Passthrough` reproduces the legacy behavior in which the local
/// check never rejected a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMatch {
    /// Skip spans whose operation differs from a non-wildcard request.
    #[default]
    Exact,

    /// The operation value never excludes a fetched span.
    Passthrough,
}

/// Errors that abort a whole query target.
///
/// Backend rejections (non-200 status) are absent on purpose: they are
/// retried and then degrade to an empty partition, see `engine::fetcher`.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query window is empty or inverted. Checked before any network
    /// activity.
    #[error("end time {to_ms}ms must be greater than start time {from_ms}ms")]
    InvalidRange { from_ms: i64, to_ms: i64 },

    /// A target was executed without a service.
    #[error("query target '{0}' has no service set")]
    MissingService(String),

    /// Network-level failure from the HTTP client. Not retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The connectivity probe got a response, but not a 200.
    #[error("connectivity probe returned status {0}")]
    ProbeFailed(u16),

    /// The shutdown signal fired while fetches were in flight.
    #[error("query cancelled")]
    Cancelled,
}

/// Result type for query execution.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = QueryFilter::default();
        assert_eq!(filter.operation, OPERATION_WILDCARD);
        assert_eq!(filter.limit, 100);
        assert!(!filter.is_runnable());
        assert!(!filter.has_operation());
    }

    #[test]
    fn test_has_operation() {
        let mut filter = QueryFilter::default();
        filter.operation = "HTTP GET".to_string();
        assert!(filter.has_operation());

        filter.operation = String::new();
        assert!(!filter.has_operation());
    }

    #[test]
    fn test_sanitized_drops_malformed_tags() {
        let filter = QueryFilter {
            tags: vec![
                "http.status=200".to_string(),
                "not a tag".to_string(),
                "missing-value=".to_string(),
                "env=prod".to_string(),
            ],
            ..QueryFilter::default()
        };
        let clean = filter.sanitized();
        assert_eq!(clean.tags, vec!["http.status=200", "env=prod"]);
    }

    #[test]
    fn test_sanitized_dedupes_extract_keys() {
        let filter = QueryFilter {
            extract_tags: vec!["env".to_string(), "host".to_string(), "env".to_string()],
            ..QueryFilter::default()
        };
        let clean = filter.sanitized();
        assert_eq!(clean.extract_tags, vec!["env", "host"]);
    }

    #[test]
    fn test_target_deserializes_flattened() {
        let target: QueryTarget = serde_json::from_str(
            r#"{"refId":"A","service":"checkout","operation":"ALL","tags":[]}"#,
        )
        .unwrap();
        assert_eq!(target.ref_id, "A");
        assert_eq!(target.filter.service, "checkout");
        assert_eq!(target.filter.limit, 100);
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::InvalidRange { from_ms: 10, to_ms: 5 };
        assert!(err.to_string().contains("must be greater"));

        let err = QueryError::MissingService("A".to_string());
        assert!(err.to_string().contains("'A'"));
    }
}
