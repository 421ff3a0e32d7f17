//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fieldcheck_log::Format;

/// Validate JSON records against a field schema.
#[derive(Parser, Debug)]
#[command(name = "fieldcheck", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `fieldcheck.toml` when present).
    #[arg(long, global = true, env = "FIELDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `warn,fieldcheck_validator=trace`.
    #[arg(long, global = true, env = "FIELDCHECK_LOG")]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, env = "FIELDCHECK_LOG_FORMAT")]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one record and print the normalized record or the errors.
    Check(CheckArgs),
    /// Print a greeting.
    Hello,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (`.toml` or `.json`); overrides the `[schema]` config table.
    #[arg(long, short)]
    pub schema: Option<PathBuf>,

    /// JSON text, `@path` to read a file, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}
