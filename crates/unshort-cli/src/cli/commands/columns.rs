//! `unshort columns <input>` – list header names with positions.

use anyhow::Result;
use std::path::Path;
use unshort_core::table::read_table;

use super::input::open_input;

pub fn run_columns(input: &Path) -> Result<()> {
    let table = read_table(open_input(input)?)?;
    if table.headers.is_empty() {
        println!("(no columns)");
        return Ok(());
    }
    for (i, name) in table.headers.iter().enumerate() {
        println!("{i}: {name}");
    }
    println!("{} data rows", table.rows.len());
    Ok(())
}
