//! Fatal pipeline errors. Any of these aborts the run; no output is delivered.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input is not valid CSV.
    #[error("malformed CSV{}: {message}", line_suffix(.line))]
    Parse { line: Option<u64>, message: String },

    /// Selected column is not part of the header.
    #[error("column {selection} not found; available columns: {available}")]
    InvalidColumn {
        selection: String,
        available: String,
    },

    /// Writing the output failed.
    #[error("failed to write CSV output: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the input failed.
    #[error("failed to read CSV input: {0}")]
    Read(#[source] std::io::Error),

    /// The interactive column prompt could not talk to the terminal.
    #[error("column prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}

impl PipelineError {
    pub fn invalid_column(selection: impl Into<String>, headers: &[String]) -> Self {
        let available = if headers.is_empty() {
            "(none)".to_string()
        } else {
            headers.join(", ")
        };
        PipelineError::InvalidColumn {
            selection: selection.into(),
            available,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line());
        match e.into_kind() {
            csv::ErrorKind::Io(io) => PipelineError::Read(io),
            csv::ErrorKind::Utf8 { err, .. } => PipelineError::Parse {
                line,
                message: format!("invalid UTF-8: {err}"),
            },
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => PipelineError::Parse {
                line,
                message: format!("expected {expected_len} fields, found {len}"),
            },
            other => PipelineError::Parse {
                line,
                message: format!("{other:?}"),
            },
        }
    }
}
