//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::query::types::OperationMatch;

/// Root configuration for the query engine.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Trace-search backend settings.
    pub backend: BackendConfig,

    /// Query execution settings.
    pub query: QueryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the trace-search API (e.g. "http://localhost:16686").
    pub base_url: String,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:16686".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

/// Query execution configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Partition count for one query window. Doubles as the cap on
    /// concurrent in-flight requests per target.
    pub max_parallel: usize,

    /// Attempts per partition before it degrades to an empty payload.
    pub search_attempts: u32,

    /// Whether the operation value also filters fetched spans locally.
    pub operation_match: OperationMatch,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_parallel: 10,
            search_attempts: 2,
            operation_match: OperationMatch::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.query.max_parallel, 10);
        assert_eq!(config.query.search_attempts, 2);
        assert_eq!(config.query.operation_match, OperationMatch::Exact);
        assert_eq!(config.backend.base_url, "http://localhost:16686");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            [query]
            max_parallel = 4
            operation_match = "passthrough"
            "#,
        )
        .unwrap();
        assert_eq!(config.query.max_parallel, 4);
        assert_eq!(config.query.operation_match, OperationMatch::Passthrough);
        assert_eq!(config.query.search_attempts, 2);
        assert_eq!(config.backend.request_timeout_secs, 30);
    }
}
