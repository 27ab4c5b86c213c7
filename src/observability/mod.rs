//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Engine subsystems produce:
//!     → logging.rs (structured log events, query-scoped fields)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, remote)
//!     → Whatever metrics recorder the embedding host installs
//! ```
//!
//! # Design Decisions
//! - Request parameters are logged as structured fields, never printed
//! - Metrics go through the `metrics` facade; this crate installs no recorder

pub mod logging;
pub mod metrics;
