//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at process start
//! - Default the filter from configuration, let `RUST_LOG` override

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_level` applies to this crate's events when `RUST_LOG` is unset.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("trace_fanout={}", default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
