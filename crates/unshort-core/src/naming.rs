//! Default output location: next to the input, file name prefixed.

use std::path::{Path, PathBuf};

/// Used when the input path has no usable file name.
const DEFAULT_FILENAME: &str = "output.csv";

/// Derives the output path for `input`.
///
/// # Examples
///
/// - `output_path_for("data/links.csv", "unshortened_")` → `data/unshortened_links.csv`
/// - `output_path_for("links", "unshortened_")` → `unshortened_links`
pub fn output_path_for(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    let file = format!("{prefix}{name}");
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
        _ => PathBuf::from(file),
    }
}
