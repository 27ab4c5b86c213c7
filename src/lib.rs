//! Partitioned trace-search query engine.

pub mod backend;
pub mod config;
pub mod engine;
pub mod flatten;
pub mod lifecycle;
pub mod observability;
pub mod query;

pub use config::schema::EngineConfig;
pub use engine::QueryEngine;
pub use lifecycle::Shutdown;
