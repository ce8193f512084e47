//! CLI command handlers. Each command is in its own file.

mod columns;
mod input;
mod resolve;
mod run;

pub use columns::run_columns;
pub use resolve::run_resolve;
pub use run::{run_unshorten, selection_from_flags};
