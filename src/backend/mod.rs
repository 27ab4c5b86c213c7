//! Trace-search backend access.
//!
//! # Responsibilities
//! - Serde mirrors of the search payload (model.rs)
//! - HTTP access to the search and probe endpoints (client.rs)

pub mod client;
pub mod model;

pub use client::SearchClient;
pub use model::{Process, RawSpan, RawTrace, SearchResponse, SpanTag};
