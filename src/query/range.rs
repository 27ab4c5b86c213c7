//! Query window partitioning.
//!
//! # Responsibilities
//! - Split one query window into contiguous, gap-free partitions
//! - Enforce the window precondition before any network activity

use serde::{Deserialize, Serialize};

use crate::query::types::{QueryError, QueryResult};

/// Closed-open query window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from_ms: i64,
    pub to_ms: i64,
}

impl TimeRange {
    pub fn new(from_ms: i64, to_ms: i64) -> Self {
        Self { from_ms, to_ms }
    }
}

/// One bounded sub-interval of a query window, fetched independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Split a window into `parts` contiguous partitions.
///
/// Every partition gets the same floor-divided duration except the last,
/// which ends exactly at `range.to_ms` and absorbs the rounding remainder.
pub fn split_time_range(range: TimeRange, parts: usize) -> QueryResult<Vec<Partition>> {
    if range.to_ms <= range.from_ms {
        return Err(QueryError::InvalidRange {
            from_ms: range.from_ms,
            to_ms: range.to_ms,
        });
    }

    let parts = parts.max(1);
    let interval = (range.to_ms - range.from_ms) / parts as i64;

    let mut partitions = Vec::with_capacity(parts);
    for i in 0..parts {
        let start = range.from_ms + i as i64 * interval;
        let end = if i < parts - 1 {
            start + interval
        } else {
            range.to_ms
        };
        partitions.push(Partition {
            start_ms: start,
            end_ms: end,
        });
    }
    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_cover_range_exactly() {
        let cases = [
            (0i64, 3_600_000i64, 4usize),
            (1_744_563_600_000, 1_744_618_527_930, 10),
            (5, 17, 7),
            (0, 1, 1),
        ];
        for (from_ms, to_ms, parts) in cases {
            let partitions = split_time_range(TimeRange::new(from_ms, to_ms), parts).unwrap();
            assert_eq!(partitions.len(), parts);
            assert_eq!(partitions[0].start_ms, from_ms);
            assert_eq!(partitions[parts - 1].end_ms, to_ms);
            for pair in partitions.windows(2) {
                assert_eq!(pair[0].end_ms, pair[1].start_ms, "gap or overlap");
            }
        }
    }

    #[test]
    fn test_equal_durations_except_last() {
        let partitions = split_time_range(TimeRange::new(0, 103), 10).unwrap();
        for partition in &partitions[..9] {
            assert_eq!(partition.end_ms - partition.start_ms, 10);
        }
        // Last partition absorbs the remainder.
        assert_eq!(partitions[9].start_ms, 90);
        assert_eq!(partitions[9].end_ms, 103);
    }

    #[test]
    fn test_one_hour_into_four_quarters() {
        let hour_ms = 3_600_000;
        let partitions = split_time_range(TimeRange::new(0, hour_ms), 4).unwrap();
        for partition in &partitions {
            assert_eq!(partition.end_ms - partition.start_ms, 900_000);
        }
    }

    #[test]
    fn test_inverted_range_is_fatal() {
        for parts in [1, 2, 10] {
            let err = split_time_range(TimeRange::new(100, 100), parts).unwrap_err();
            assert!(matches!(err, QueryError::InvalidRange { .. }));

            let err = split_time_range(TimeRange::new(100, 50), parts).unwrap_err();
            assert!(matches!(err, QueryError::InvalidRange { .. }));
        }
    }

    #[test]
    fn test_single_partition() {
        let partitions = split_time_range(TimeRange::new(7, 19), 1).unwrap();
        assert_eq!(partitions, vec![Partition { start_ms: 7, end_ms: 19 }]);
    }
}
