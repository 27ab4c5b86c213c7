//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file → loader.rs (parse) → validation.rs (semantic checks) → EngineConfig
//! ```
//!
//! # Design Decisions
//! - Serde handles syntax; validation.rs handles semantics
//! - Every section has defaults, so an empty file is a valid configuration

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BackendConfig, EngineConfig, ObservabilityConfig, QueryConfig};
