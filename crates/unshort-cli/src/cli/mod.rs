//! CLI for unshort.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unshort_core::config::{self, RequestMethod, UnshortConfig};

use commands::{run_columns, run_resolve, run_unshorten};

/// Top-level CLI for unshort.
#[derive(Debug, Parser)]
#[command(name = "unshort")]
#[command(about = "Resolve shortened URLs in a CSV column to their final destination", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/unshort/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve every URL in one column and write the CSV with an extra column.
    Run {
        /// Input CSV file, or "-" for stdin.
        input: PathBuf,

        /// Output CSV file, or "-" for stdout. Default: unshortened_<input> next to the input.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Column holding the URLs, by header name. Prompts if neither selector is given.
        #[arg(long, conflicts_with = "column_index")]
        column: Option<String>,

        /// Column holding the URLs, by zero-based position.
        #[arg(long, value_name = "N")]
        column_index: Option<usize>,

        /// Header for the appended column (default from config: unshortened_url).
        #[arg(long, value_name = "NAME")]
        output_column: Option<String>,

        /// Do not print per-row progress.
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        net: NetArgs,
    },

    /// Resolve URLs given on the command line and print the results.
    Resolve {
        /// One or more URLs.
        #[arg(required = true)]
        urls: Vec<String>,

        #[command(flatten)]
        net: NetArgs,
    },

    /// List the columns of a CSV file with their positions.
    Columns {
        /// Input CSV file, or "-" for stdin.
        input: PathBuf,
    },
}

/// Request options that override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct NetArgs {
    /// Maximum redirects to follow per URL.
    #[arg(long, value_name = "N")]
    pub max_redirects: Option<u32>,

    /// Total timeout per URL in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Request method used to walk the redirect chain.
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Head,
    Get,
}

impl From<MethodArg> for RequestMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Head => RequestMethod::Head,
            MethodArg::Get => RequestMethod::Get,
        }
    }
}

impl NetArgs {
    /// Returns `cfg` with any flags given on the command line applied.
    pub fn apply(&self, mut cfg: UnshortConfig) -> UnshortConfig {
        if let Some(n) = self.max_redirects {
            cfg.max_redirects = n;
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        if let Some(m) = self.method {
            cfg.method = m.into();
        }
        cfg
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<UnshortConfig> {
    match path {
        Some(p) => config::load_or_init_at(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                input,
                output,
                column,
                column_index,
                output_column,
                quiet,
                net,
            } => {
                let mut cfg = net.apply(cfg);
                if let Some(name) = output_column {
                    cfg.output_column = name;
                }
                let selection = commands::selection_from_flags(column, column_index);
                run_unshorten(&cfg, &input, output.as_deref(), selection, quiet)?;
            }
            CliCommand::Resolve { urls, net } => run_resolve(&net.apply(cfg), &urls)?,
            CliCommand::Columns { input } => run_columns(&input)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
