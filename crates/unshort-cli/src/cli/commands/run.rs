//! `unshort run <input>` – resolve one column of a CSV file.
//!
//! Output goes to a temp file in the destination directory and is moved into
//! place only after the whole run succeeded, so a fatal error leaves no file.

use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use unshort_core::column::{ColumnPicker, ColumnSelection};
use unshort_core::config::UnshortConfig;
use unshort_core::naming::output_path_for;
use unshort_core::pipeline::{self, PipelineOptions, RunSummary};
use unshort_core::resolve::{CurlResolver, ResolverSettings};
use unshort_core::transform::RowEvent;

use super::input::{is_stdio, open_input};
use crate::cli::prompt::PromptPicker;

/// Column choice from `--column` / `--column-index`, if either was given.
pub fn selection_from_flags(
    column: Option<String>,
    column_index: Option<usize>,
) -> Option<ColumnSelection> {
    match (column, column_index) {
        (Some(name), _) => Some(ColumnSelection::Name(name)),
        (None, Some(i)) => Some(ColumnSelection::Index(i)),
        (None, None) => None,
    }
}

pub fn run_unshorten(
    cfg: &UnshortConfig,
    input: &Path,
    output: Option<&Path>,
    selection: Option<ColumnSelection>,
    quiet: bool,
) -> Result<()> {
    let from_stdin = is_stdio(input);
    let output: PathBuf = match output {
        Some(p) => p.to_path_buf(),
        None if from_stdin => PathBuf::from("-"),
        None => output_path_for(input, &cfg.output_prefix),
    };

    let mut picker: Box<dyn ColumnPicker> = match selection {
        Some(sel) => Box::new(sel),
        None if from_stdin => {
            bail!("--column or --column-index is required when reading from stdin")
        }
        None => Box::new(PromptPicker::new(io::stdin().lock(), io::stderr())),
    };

    let reader = open_input(input)?;
    let mut resolver = CurlResolver::new(ResolverSettings::from(cfg));
    let options = PipelineOptions {
        output_column: cfg.output_column.clone(),
    };
    let progress = |ev: &RowEvent<'_>| {
        if !quiet {
            eprintln!(
                "Processed: row {} - {} -> {}",
                ev.index + 1,
                ev.input,
                ev.resolution.cell_value()
            );
        }
    };

    tracing::info!(input = %input.display(), output = %output.display(), "starting run");

    let summary = if is_stdio(&output) {
        let stdout = io::stdout();
        let mut sink = stdout.lock();
        let summary = pipeline::run(
            reader,
            &mut sink,
            picker.as_mut(),
            &mut resolver,
            &options,
            progress,
        )?;
        sink.flush().context("flush stdout")?;
        summary
    } else {
        let dir = match output.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut staged = NamedTempFile::new_in(&dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        let summary = pipeline::run(
            reader,
            staged.as_file_mut(),
            picker.as_mut(),
            &mut resolver,
            &options,
            progress,
        )?;
        staged
            .persist(&output)
            .with_context(|| format!("write output {}", output.display()))?;
        summary
    };

    report(&summary, &output);
    Ok(())
}

fn report(summary: &RunSummary, output: &Path) {
    let stats = summary.stats;
    eprintln!(
        "Processing complete: {} rows from column {:?} ({} resolved, {} failed).",
        stats.rows, summary.source_column, stats.resolved, stats.failed
    );
    if !is_stdio(output) {
        eprintln!(
            "Results written to {} (new column {:?}).",
            output.display(),
            summary.output_column
        );
    }
}
