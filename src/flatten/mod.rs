//! Span flattening and table assembly.
//!
//! # Data Flow
//! ```text
//! RawTrace (per partition)
//!     → span_filter.rs (focus processes, operation predicate, tag enrichment)
//!     → table.rs (column-oriented assembly, fixed column order)
//! ```

pub mod span_filter;
pub mod table;

pub use span_filter::{FlatSpanRow, SpanFilter};
pub use table::{assemble, Column, ColumnValues, Table};
