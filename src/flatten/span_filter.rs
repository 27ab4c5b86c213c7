//! Span selection and tag enrichment.
//!
//! # Responsibilities
//! - Resolve which processes of a trace belong to the requested service
//! - Select spans on those processes, subject to the operation predicate
//! - Surface requested tag keys as row values

use std::collections::HashSet;

use crate::backend::model::{RawSpan, RawTrace};
use crate::query::types::{OperationMatch, QueryFilter};

/// A span flattened to one output row.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSpanRow {
    pub trace_id: String,
    pub span_id: String,
    pub operation_name: String,

    /// Milliseconds since the unix epoch (the wire carries microseconds).
    pub start_time_ms: i64,

    /// Microseconds, unconverted.
    pub duration_us: u64,

    /// Values for the declared extract keys, in declaration order.
    /// Absent tags stay `None`.
    pub extracted: Vec<Option<String>>,
}

/// Selects and enriches spans for one query target.
#[derive(Debug, Clone)]
pub struct SpanFilter {
    service: String,
    /// `None` means the wildcard: every operation is admitted.
    operation: Option<String>,
    mode: OperationMatch,
    extract_keys: Vec<String>,
}

impl SpanFilter {
    /// Build from a sanitized filter.
    pub fn new(filter: &QueryFilter, mode: OperationMatch) -> Self {
        Self {
            service: filter.service.clone(),
            operation: filter.has_operation().then(|| filter.operation.clone()),
            mode,
            extract_keys: filter.extract_tags.clone(),
        }
    }

    /// Declared extract-tag keys, in column order.
    pub fn extract_keys(&self) -> &[String] {
        &self.extract_keys
    }

    /// Flatten one trace into output rows.
    pub fn filter_trace(&self, trace: &RawTrace) -> Vec<FlatSpanRow> {
        let focus: HashSet<&str> = trace
            .processes
            .iter()
            .filter(|(_, process)| process.service_name == self.service)
            .map(|(process_id, _)| process_id.as_str())
            .collect();

        trace
            .spans
            .iter()
            .filter(|span| focus.contains(span.process_id.as_str()))
            .filter(|span| self.operation_admits(span))
            .map(|span| self.flatten(trace, span))
            .collect()
    }

    fn operation_admits(&self, span: &RawSpan) -> bool {
        match (self.mode, &self.operation) {
            (OperationMatch::Passthrough, _) | (_, None) => true,
            (OperationMatch::Exact, Some(operation)) => span.operation_name == *operation,
        }
    }

    fn flatten(&self, trace: &RawTrace, span: &RawSpan) -> FlatSpanRow {
        let mut extracted = vec![None; self.extract_keys.len()];
        for tag in &span.tags {
            if let Some(slot) = self.extract_keys.iter().position(|key| *key == tag.key) {
                extracted[slot] = Some(tag.value_text());
            }
        }

        FlatSpanRow {
            trace_id: trace.trace_id.clone(),
            span_id: span.span_id.clone(),
            operation_name: span.operation_name.clone(),
            start_time_ms: (span.start_time / 1_000) as i64,
            duration_us: span.duration,
            extracted,
        }
    }
}
