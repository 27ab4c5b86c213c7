//! Concurrent fan-out across partitions.
//!
//! # Design Decisions
//! - All partition fetches start together; the join waits for every one
//! - Results keep partition order
//! - The first transport error aborts the remaining fetches
//! - A shutdown trigger resolves in-flight fetches as `Cancelled`

use futures_util::future::try_join_all;

use super::fetcher::fetch_partition;
use crate::backend::client::SearchClient;
use crate::backend::model::RawTrace;
use crate::lifecycle::Shutdown;
use crate::query::params::SearchParams;
use crate::query::range::Partition;
use crate::query::types::{QueryError, QueryResult};

/// Fetch every partition concurrently and join wait-for-all.
///
/// Returns one payload list per partition, in partition order. Partitions
/// that exhausted their attempts contribute an empty list.
pub async fn fan_out(
    client: &SearchClient,
    params: &SearchParams,
    partitions: &[Partition],
    attempts: u32,
    shutdown: &Shutdown,
) -> QueryResult<Vec<Vec<RawTrace>>> {
    let fetches = partitions.iter().map(|partition| {
        let mut cancel = shutdown.subscribe();
        async move {
            tokio::select! {
                payload = fetch_partition(client, params, partition, attempts) => payload,
                _ = cancel.recv() => Err(QueryError::Cancelled),
            }
        }
    });

    try_join_all(fetches).await
}
