//! CSV output: [`Table`] plus the appended column header to bytes.

use std::io::Write;

use super::Table;
use crate::error::PipelineError;

/// Writes `table` as CSV. `table.headers` must already include the appended
/// column; fields that need it are quoted.
pub fn write_table<W: Write>(table: &Table, output: W) -> Result<(), PipelineError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(false)
        .from_writer(output);

    if !table.headers.is_empty() {
        writer.write_record(&table.headers).map_err(write_error)?;
    }
    for row in &table.rows {
        writer.write_record(row.fields()).map_err(write_error)?;
    }
    writer.flush().map_err(PipelineError::Write)?;
    Ok(())
}

fn write_error(e: csv::Error) -> PipelineError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => PipelineError::Write(io),
        other => PipelineError::Write(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{other:?}"),
        )),
    }
}
