//! In-memory CSV table: ordered headers plus ordered rows.
//!
//! Rows keep their fields positionally, aligned with `headers`.

mod quote;
mod read;
mod write;

pub use read::read_table;
pub use write::write_table;

/// One data row. Fields are aligned with [`Table::headers`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Returns a copy of this row with `value` appended as the last field.
    pub fn with_appended(mut self, value: String) -> Self {
        self.fields.push(value);
        self
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Parsed CSV contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}
