//! Interactive column choice: list the headers, ask until the answer is valid.

use std::io::{BufRead, Write};
use unshort_core::column::{ColumnPicker, ColumnSelection};
use unshort_core::error::PipelineError;

/// Asks on `output`, reads answers from `input`. Accepts a column number
/// or an exact header name.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, headers: &[String]) -> std::io::Result<Option<ColumnSelection>> {
        writeln!(self.output, "Available columns:")?;
        for (i, name) in headers.iter().enumerate() {
            writeln!(self.output, "{i}: {name}")?;
        }

        let mut line = String::new();
        loop {
            write!(
                self.output,
                "Enter the number of the column containing the URLs to unshorten: "
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();

            if let Ok(i) = answer.parse::<usize>() {
                if i < headers.len() {
                    return Ok(Some(ColumnSelection::Index(i)));
                }
                writeln!(
                    self.output,
                    "Invalid selection. Please choose a number from the list."
                )?;
            } else if headers.iter().any(|h| h == answer) {
                return Ok(Some(ColumnSelection::Name(answer.to_string())));
            } else {
                writeln!(self.output, "Please enter a valid number.")?;
            }
        }
    }
}

impl<R: BufRead, W: Write> ColumnPicker for PromptPicker<R, W> {
    fn pick(&mut self, headers: &[String]) -> Result<ColumnSelection, PipelineError> {
        if headers.is_empty() {
            return Err(PipelineError::invalid_column("(input has no header)", headers));
        }
        match self.ask(headers).map_err(PipelineError::Prompt)? {
            Some(selection) => Ok(selection),
            None => Err(PipelineError::invalid_column("(no selection made)", headers)),
        }
    }
}
