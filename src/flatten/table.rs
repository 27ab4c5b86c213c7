//! Column-oriented result assembly.
//!
//! # Design Decisions
//! - Fixed leading columns, then one string column per extract key
//! - Rows keep partition-then-trace-then-span encounter order
//! - No sorting and no deduplication across partitions; a trace straddling a
//!   partition boundary may contribute rows more than once

use serde::Serialize;

use super::span_filter::FlatSpanRow;

/// Column payloads, one variant per declared column type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "values")]
pub enum ColumnValues {
    String(Vec<String>),
    Number(Vec<u64>),
    /// Epoch milliseconds.
    Timestamp(Vec<i64>),
    /// String column admitting absent cells (extract-tag columns).
    NullableString(Vec<Option<String>>),
}

impl ColumnValues {
    fn len(&self) -> usize {
        match self {
            ColumnValues::String(values) => values.len(),
            ColumnValues::Number(values) => values.len(),
            ColumnValues::Timestamp(values) => values.len(),
            ColumnValues::NullableString(values) => values.len(),
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(flatten)]
    pub values: ColumnValues,
}

/// Tabular result for one query target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Caller-side target identifier this table answers.
    pub ref_id: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Assemble per-partition rows into one table.
///
/// `extract_keys` must match the key order the rows were built with.
pub fn assemble(
    ref_id: &str,
    partition_rows: &[Vec<FlatSpanRow>],
    extract_keys: &[String],
) -> Table {
    let mut trace_ids = Vec::new();
    let mut span_ids = Vec::new();
    let mut durations = Vec::new();
    let mut start_times = Vec::new();
    let mut operation_names = Vec::new();
    let mut tag_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); extract_keys.len()];

    for rows in partition_rows {
        for row in rows {
            trace_ids.push(row.trace_id.clone());
            span_ids.push(row.span_id.clone());
            durations.push(row.duration_us);
            start_times.push(row.start_time_ms);
            operation_names.push(row.operation_name.clone());
            for (slot, value) in row.extracted.iter().enumerate() {
                tag_columns[slot].push(value.clone());
            }
        }
    }

    let mut columns = vec![
        Column {
            name: "traceID".to_string(),
            values: ColumnValues::String(trace_ids),
        },
        Column {
            name: "spanID".to_string(),
            values: ColumnValues::String(span_ids),
        },
        Column {
            name: "duration".to_string(),
            values: ColumnValues::Number(durations),
        },
        Column {
            name: "startTime".to_string(),
            values: ColumnValues::Timestamp(start_times),
        },
        Column {
            name: "operationName".to_string(),
            values: ColumnValues::String(operation_names),
        },
    ];
    for (key, values) in extract_keys.iter().zip(tag_columns) {
        columns.push(Column {
            name: key.clone(),
            values: ColumnValues::NullableString(values),
        });
    }

    Table {
        ref_id: ref_id.to_string(),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(trace_id: &str, span_id: &str, extracted: Vec<Option<String>>) -> FlatSpanRow {
        FlatSpanRow {
            trace_id: trace_id.to_string(),
            span_id: span_id.to_string(),
            operation_name: "X".to_string(),
            start_time_ms: 1_000,
            duration_us: 42,
            extracted,
        }
    }

    #[test]
    fn test_rows_merge_in_partition_order() {
        let partitions = vec![
            vec![row("t1", "s1", vec![]), row("t1", "s2", vec![])],
            vec![],
            vec![row("t2", "s3", vec![])],
        ];
        let table = assemble("A", &partitions, &[]);

        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column("spanID").unwrap().values,
            ColumnValues::String(vec!["s1".to_string(), "s2".to_string(), "s3".to_string()])
        );
    }

    #[test]
    fn test_column_order() {
        let keys = vec!["env".to_string(), "host".to_string()];
        let table = assemble("A", &[], &keys);
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["traceID", "spanID", "duration", "startTime", "operationName", "env", "host"]
        );
    }

    #[test]
    fn test_extract_columns_stay_row_aligned() {
        let keys = vec!["env".to_string()];
        let partitions = vec![
            vec![row("t1", "s1", vec![Some("prod".to_string())])],
            vec![row("t2", "s2", vec![None])],
        ];
        let table = assemble("A", &partitions, &keys);

        assert_eq!(
            table.column("env").unwrap().values,
            ColumnValues::NullableString(vec![Some("prod".to_string()), None])
        );
    }

    #[test]
    fn test_empty_table() {
        let table = assemble("A", &[], &[]);
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.ref_id, "A");
        assert_eq!(table.columns.len(), 5);
    }

    #[test]
    fn test_duplicate_traces_are_not_collapsed() {
        // A trace straddling a partition boundary shows up once per partition.
        let partitions = vec![
            vec![row("t1", "s1", vec![])],
            vec![row("t1", "s1", vec![])],
        ];
        let table = assemble("A", &partitions, &[]);
        assert_eq!(table.row_count(), 2);
    }
}
