//! Backend request parameters.
//!
//! # Responsibilities
//! - Build the shared parameter template for one query target
//! - Expand the template into concrete request pairs per partition
//!
//! # Design Decisions
//! - The template is typed; stringly encoding happens only in `query_pairs`
//! - Partition bounds are converted to the backend's microsecond resolution
//!   at the last moment

use crate::query::range::Partition;
use crate::query::tags;
use crate::query::types::QueryFilter;

/// Marker telling the backend the window is explicit rather than relative.
const LOOKBACK_CUSTOM: &str = "custom";

/// Shared parameter template for one query target.
///
/// Built once per target and cloned into concrete request pairs per
/// partition; only `start` and `end` differ between partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    service: Option<String>,
    operation: Option<String>,
    max_duration: Option<String>,
    min_duration: Option<String>,
    tags_json: String,
    limit: Option<u32>,
}

impl SearchParams {
    /// Build the template from a sanitized filter.
    pub fn from_filter(filter: &QueryFilter) -> Self {
        Self {
            service: (!filter.service.is_empty()).then(|| filter.service.clone()),
            operation: filter.has_operation().then(|| filter.operation.clone()),
            max_duration: filter.max_duration.clone().filter(|d| !d.is_empty()),
            min_duration: filter.min_duration.clone().filter(|d| !d.is_empty()),
            tags_json: tags::tags_parameter(&filter.tags),
            limit: (filter.limit > 0).then_some(filter.limit),
        }
    }

    /// Concrete query pairs for one partition.
    pub fn query_pairs(&self, partition: &Partition) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(9);
        if let Some(service) = &self.service {
            pairs.push(("service", service.clone()));
        }
        if let Some(operation) = &self.operation {
            pairs.push(("operation", operation.clone()));
        }
        if let Some(max_duration) = &self.max_duration {
            pairs.push(("maxDuration", max_duration.clone()));
        }
        if let Some(min_duration) = &self.min_duration {
            pairs.push(("minDuration", min_duration.clone()));
        }
        pairs.push(("tags", self.tags_json.clone()));
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs.push(("lookback", LOOKBACK_CUSTOM.to_string()));
        pairs.push(("start", (partition.start_ms * 1_000).to_string()));
        pairs.push(("end", (partition.end_ms * 1_000).to_string()));
        pairs
    }
}
