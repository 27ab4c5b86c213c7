//! Query model and pre-flight transforms.
//!
//! # Data Flow
//! ```text
//! QueryFilter (caller)
//!     → tags.rs (validate + canonicalize tag entries)
//!     → params.rs (build the shared request template)
//!     → range.rs (split the window into partitions)
//! ```
//!
//! # Design Decisions
//! - Everything here is a pure function; no network, no clock
//! - Malformed tag entries never reach parameter construction
//! - JSON serialization happens only at the request-encoding boundary

pub mod params;
pub mod range;
pub mod tags;
pub mod types;

pub use params::SearchParams;
pub use range::{split_time_range, Partition, TimeRange};
pub use types::{OperationMatch, QueryError, QueryFilter, QueryResult, QueryTarget};
