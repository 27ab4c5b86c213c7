//! Metrics collection.
//!
//! # Metrics
//! - `trace_search_attempts_total` (counter): search attempts by status
//! - `trace_search_partitions_exhausted_total` (counter): partitions that
//!   degraded to an empty payload after exhausting their attempts
//! - `trace_query_rows_total` (counter): rows produced across targets
//! - `trace_query_duration_seconds` (histogram): per-target latency
//!
//! # Design Decisions
//! - Facade only; the embedding host installs its own recorder
//! - Exhausted partitions are visible here and in the logs, never in the
//!   row data (the empty-on-exhaustion contract)

use std::time::Duration;

/// Record one search attempt and the status it came back with.
pub fn record_search_attempt(status: u16) {
    metrics::counter!("trace_search_attempts_total", "status" => status.to_string()).increment(1);
}

/// Record a partition that exhausted its attempts.
pub fn record_partition_exhausted() {
    metrics::counter!("trace_search_partitions_exhausted_total").increment(1);
}

/// Record a completed query target.
pub fn record_query(rows: usize, elapsed: Duration) {
    metrics::counter!("trace_query_rows_total").increment(rows as u64);
    metrics::histogram!("trace_query_duration_seconds").record(elapsed.as_secs_f64());
}
