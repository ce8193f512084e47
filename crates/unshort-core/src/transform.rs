//! Row transformer: resolve the selected column of every row, in order.

use crate::resolve::{Resolution, Resolver};
use crate::table::{Row, Table};

/// Progress notification for one processed row.
#[derive(Debug)]
pub struct RowEvent<'a> {
    /// Zero-based data row index.
    pub index: usize,
    /// Raw value of the selected column.
    pub input: &'a str,
    pub resolution: &'a Resolution,
}

/// Counters for a finished pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub rows: usize,
    pub resolved: usize,
    pub failed: usize,
}

/// Appends one resolved-URL field to every row.
///
/// Rows are processed strictly one after another; output row `i` is input
/// row `i` plus the resolution of its `column` value. Failures end up as the
/// field's error marker and never stop the pass.
pub fn transform_rows<R, F>(
    rows: Vec<Row>,
    column: usize,
    resolver: &mut R,
    mut observer: F,
) -> (Vec<Row>, TransformStats)
where
    R: Resolver + ?Sized,
    F: FnMut(&RowEvent<'_>),
{
    let mut stats = TransformStats::default();
    let mut out = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let input = row.get(column).unwrap_or_default().to_string();
        let resolution = resolver.resolve(&input);

        stats.rows += 1;
        if resolution.is_resolved() {
            stats.resolved += 1;
        } else {
            stats.failed += 1;
        }
        observer(&RowEvent {
            index,
            input: &input,
            resolution: &resolution,
        });
        tracing::debug!(row = index, input = %input, cell = %resolution.cell_value(), "row done");

        out.push(row.with_appended(resolution.cell_value()));
    }

    (out, stats)
}

/// [`transform_rows`] over a whole table, adding `new_column` to the header.
pub fn transform_table<R, F>(
    table: Table,
    column: usize,
    new_column: &str,
    resolver: &mut R,
    observer: F,
) -> (Table, TransformStats)
where
    R: Resolver + ?Sized,
    F: FnMut(&RowEvent<'_>),
{
    let Table { mut headers, rows } = table;
    let (rows, stats) = transform_rows(rows, column, resolver, observer);
    headers.push(new_column.to_string());
    (Table { headers, rows }, stats)
}
