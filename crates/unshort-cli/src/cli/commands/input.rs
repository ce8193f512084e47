//! Input/output endpoints: a path, or "-" for the standard streams.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Opens `path` for reading, or stdin for "-".
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("open input {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
