//! Column selection: which column holds the URLs to resolve.
//!
//! The interactive prompt lives in the CLI; the core only sees the
//! [`ColumnPicker`] trait and validates whatever it returns.

use std::fmt;

use crate::error::PipelineError;

/// A column chosen by header name or by zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    Name(String),
    Index(usize),
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelection::Name(name) => write!(f, "{name:?}"),
            ColumnSelection::Index(i) => write!(f, "#{i}"),
        }
    }
}

impl ColumnSelection {
    /// Maps the selection onto `headers`, failing if it names no column.
    pub fn resolve(&self, headers: &[String]) -> Result<usize, PipelineError> {
        let found = match self {
            ColumnSelection::Name(name) => headers.iter().position(|h| h == name),
            ColumnSelection::Index(i) => (*i < headers.len()).then_some(*i),
        };
        found.ok_or_else(|| PipelineError::invalid_column(self.to_string(), headers))
    }
}

/// Source of the column choice (fixed flag, interactive prompt, ...).
pub trait ColumnPicker {
    fn pick(&mut self, headers: &[String]) -> Result<ColumnSelection, PipelineError>;
}

/// A selection made up front always picks itself.
impl ColumnPicker for ColumnSelection {
    fn pick(&mut self, _headers: &[String]) -> Result<ColumnSelection, PipelineError> {
        Ok(self.clone())
    }
}

/// Returns `base` if unused in `headers`, otherwise `base_2`, `base_3`, ...
pub fn unique_column_name(base: &str, headers: &[String]) -> String {
    if !headers.iter().any(|h| h == base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !headers.iter().any(|h| h == candidate))
        .unwrap_or_else(|| base.to_string())
}
