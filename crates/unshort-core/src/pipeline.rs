//! End-to-end run: CSV bytes in, augmented CSV bytes out.
//!
//! Where the bytes come from and go to is the caller's business; the
//! pipeline only sees a `Read` and a `Write`.

use std::io::{Read, Write};

use crate::column::{unique_column_name, ColumnPicker};
use crate::config::DEFAULT_OUTPUT_COLUMN;
use crate::error::PipelineError;
use crate::resolve::Resolver;
use crate::table::{read_table, write_table};
use crate::transform::{transform_table, RowEvent, TransformStats};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Preferred header for the appended column; suffixed if already taken.
    pub output_column: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            output_column: DEFAULT_OUTPUT_COLUMN.to_string(),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Header of the column whose values were resolved.
    pub source_column: String,
    /// Header actually used for the appended column.
    pub output_column: String,
    pub stats: TransformStats,
}

/// Reads CSV from `input`, resolves the picked column and writes the result.
///
/// Parse, column and write errors abort the run. Nothing is written to
/// `output` unless reading and column selection succeeded.
pub fn run<R, W, P, S, F>(
    input: R,
    output: W,
    picker: &mut P,
    resolver: &mut S,
    options: &PipelineOptions,
    observer: F,
) -> Result<RunSummary, PipelineError>
where
    R: Read,
    W: Write,
    P: ColumnPicker + ?Sized,
    S: Resolver + ?Sized,
    F: FnMut(&RowEvent<'_>),
{
    let table = read_table(input)?;
    let selection = picker.pick(&table.headers)?;
    let column = selection.resolve(&table.headers)?;
    let source_column = table.headers[column].clone();
    let output_column = unique_column_name(&options.output_column, &table.headers);

    tracing::info!(
        column = %source_column,
        rows = table.rows.len(),
        output_column = %output_column,
        "resolving URLs"
    );

    let (table, stats) = transform_table(table, column, &output_column, resolver, observer);
    write_table(&table, output)?;

    tracing::info!(
        rows = stats.rows,
        resolved = stats.resolved,
        failed = stats.failed,
        "run complete"
    );

    Ok(RunSummary {
        source_column,
        output_column,
        stats,
    })
}
