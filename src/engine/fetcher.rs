//! Per-partition fetch with bounded retry.
//!
//! # Design Decisions
//! - Only a 200 status counts as success; the first success short-circuits
//! - Exhausted attempts degrade to an empty payload, never an error
//! - Transport failures are not retried here; they abort the whole fan-out

use reqwest::StatusCode;

use crate::backend::client::SearchClient;
use crate::backend::model::{RawTrace, SearchResponse};
use crate::observability::metrics;
use crate::query::params::SearchParams;
use crate::query::range::Partition;
use crate::query::types::QueryResult;

/// Fetch one partition's trace payload.
pub async fn fetch_partition(
    client: &SearchClient,
    params: &SearchParams,
    partition: &Partition,
    attempts: u32,
) -> QueryResult<Vec<RawTrace>> {
    let pairs = params.query_pairs(partition);
    tracing::debug!(
        start_ms = partition.start_ms,
        end_ms = partition.end_ms,
        params = ?pairs,
        "Dispatching partition search"
    );

    for attempt in 1..=attempts.max(1) {
        let response = client.search(&pairs).await?;
        let status = response.status();
        metrics::record_search_attempt(status.as_u16());

        if status == StatusCode::OK {
            let body: SearchResponse = response.json().await?;
            tracing::debug!(
                start_ms = partition.start_ms,
                end_ms = partition.end_ms,
                traces = body.data.len(),
                "Partition search succeeded"
            );
            return Ok(body.data);
        }

        tracing::warn!(
            attempt,
            status = status.as_u16(),
            start_ms = partition.start_ms,
            end_ms = partition.end_ms,
            "Partition search rejected by backend"
        );
    }

    metrics::record_partition_exhausted();
    tracing::warn!(
        start_ms = partition.start_ms,
        end_ms = partition.end_ms,
        attempts,
        "Partition attempts exhausted, returning empty payload"
    );
    Ok(Vec::new())
}
