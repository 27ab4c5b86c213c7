//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! ctrl-c / host abort → Shutdown::trigger
//!     → every in-flight partition fetch resolves as cancelled
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
