//! CSV input: bytes to [`Table`].

use std::io::Read;

use super::quote::scan;
use super::{Row, Table};
use crate::error::PipelineError;

/// Reads a whole CSV document with a header row.
///
/// Empty input yields an empty table. Every data row must have as many
/// fields as the header. In a one-column document a blank line is a row
/// with one empty field; with more columns blank lines are skipped.
pub fn read_table<R: Read>(mut input: R) -> Result<Table, PipelineError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data).map_err(PipelineError::Read)?;

    let scanned = scan(&data, b',');
    if scanned.ends_inside_quotes {
        return Err(PipelineError::Parse {
            line: None,
            message: "unterminated quoted field at end of input".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_slice());

    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        tracing::debug!("read empty CSV input");
        return Ok(Table::default());
    }
    let headers: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .map(str::to_string)
        .collect();

    let keep_blank = headers.len() == 1;
    let mut blanks = scanned.blank_lines.into_iter().peekable();
    let mut rows = Vec::new();
    loop {
        let start = reader.position().byte();
        let more = reader.read_record(&mut record)?;
        // Blank lines the parser skipped before this record (or before EOF).
        let end = if more { reader.position().byte() } else { u64::MAX };
        while let Some(offset) = blanks.next_if(|&offset| offset < end) {
            if keep_blank && offset >= start {
                rows.push(Row::new(vec![String::new()]));
            }
        }
        if !more {
            break;
        }
        rows.push(record.iter().collect::<Row>());
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "read CSV input");
    Ok(Table { headers, rows })
}
