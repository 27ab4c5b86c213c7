//! Query execution engine.
//!
//! # Data Flow
//! ```text
//! QueryTarget
//!     → query::range (partition the window)
//!     → query::params (shared request template)
//!     → executor.rs (N concurrent fetches, bounded retry each)
//!     → flatten::span_filter (per-trace span selection + enrichment)
//!     → flatten::table (column-oriented assembly)
//! ```
//!
//! # Design Decisions
//! - The engine is cheap to clone and share across targets
//! - Targets execute independently; a failing target never poisons another
//! - Exhausted-retry partitions shrink the result instead of failing it

pub mod executor;
pub mod fetcher;

use std::time::Instant;

use futures_util::future::join_all;
use uuid::Uuid;

use crate::backend::client::SearchClient;
use crate::config::schema::QueryConfig;
use crate::flatten::span_filter::SpanFilter;
use crate::flatten::table::{assemble, Table};
use crate::lifecycle::Shutdown;
use crate::query::params::SearchParams;
use crate::query::range::{split_time_range, TimeRange};
use crate::query::types::{QueryError, QueryResult, QueryTarget};

/// Engine executing logical query targets against one backend.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    client: SearchClient,
    config: QueryConfig,
}

impl QueryEngine {
    /// Create an engine from a client and execution settings.
    pub fn new(client: SearchClient, config: QueryConfig) -> Self {
        Self { client, config }
    }

    /// Execute one target over the given window.
    ///
    /// The window is split into `max_parallel` partitions fetched
    /// concurrently; matching spans from every partition merge into one
    /// table in partition order.
    pub async fn run_target(
        &self,
        target: &QueryTarget,
        range: TimeRange,
        shutdown: &Shutdown,
    ) -> QueryResult<Table> {
        let filter = target.filter.sanitized();
        if !filter.is_runnable() {
            return Err(QueryError::MissingService(target.ref_id.clone()));
        }

        let query_id = Uuid::new_v4();
        let started = Instant::now();
        let partitions = split_time_range(range, self.config.max_parallel)?;
        let params = SearchParams::from_filter(&filter);

        tracing::info!(
            %query_id,
            ref_id = %target.ref_id,
            service = %filter.service,
            partitions = partitions.len(),
            from_ms = range.from_ms,
            to_ms = range.to_ms,
            "Executing trace search"
        );

        let payloads = executor::fan_out(
            &self.client,
            &params,
            &partitions,
            self.config.search_attempts,
            shutdown,
        )
        .await?;

        let span_filter = SpanFilter::new(&filter, self.config.operation_match);
        let partition_rows: Vec<Vec<_>> = payloads
            .iter()
            .map(|traces| {
                traces
                    .iter()
                    .flat_map(|trace| span_filter.filter_trace(trace))
                    .collect()
            })
            .collect();

        let table = assemble(&target.ref_id, &partition_rows, span_filter.extract_keys());

        crate::observability::metrics::record_query(table.row_count(), started.elapsed());
        tracing::info!(
            %query_id,
            ref_id = %target.ref_id,
            rows = table.row_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Trace search complete"
        );

        Ok(table)
    }

    /// Execute several targets concurrently.
    ///
    /// Targets without a service are skipped entirely. Each remaining target
    /// resolves on its own; one table or one error per target, in input
    /// order.
    pub async fn run_targets(
        &self,
        targets: &[QueryTarget],
        range: TimeRange,
        shutdown: &Shutdown,
    ) -> Vec<QueryResult<Table>> {
        let runnable: Vec<&QueryTarget> = targets
            .iter()
            .filter(|target| {
                if target.filter.is_runnable() {
                    true
                } else {
                    tracing::debug!(ref_id = %target.ref_id, "Skipping target without a service");
                    false
                }
            })
            .collect();

        join_all(
            runnable
                .iter()
                .map(|target| self.run_target(target, range, shutdown)),
        )
        .await
    }

    /// Execution settings this engine runs with.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }
}
