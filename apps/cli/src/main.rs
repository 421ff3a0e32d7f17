//! # fieldcheck CLI Entry Point
//!
//! Exit codes: `0` valid, `1` invalid, `2` undecodable input, `3` any other
//! failure.

mod cli;
mod config;
mod input;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fieldcheck_log::LoggerBuilder;
use fieldcheck_validator::{
    record::Record,
    schema::SchemaDef,
    validator::{ValidationOutcome, Validator},
};

use crate::cli::{CheckArgs, Cli, Command};
use crate::config::AppConfig;
use crate::input::Input;

const EXIT_INVALID: u8 = 1;
const EXIT_DECODE: u8 = 2;
const EXIT_FAILURE: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Help and version exit 0; every other usage error exits with `EXIT_FAILURE`.
fn usage_exit(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(EXIT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let mut log = config.log.unwrap_or_else(fieldcheck_log::Config::from_env);
    if let Some(level) = cli.log_level {
        log.level = level;
    }
    if let Some(format) = cli.log_format {
        log.format = format;
    }
    LoggerBuilder::from_config(log)
        .build()
        .context("failed to initialize logging")?;

    match cli.command {
        Command::Hello => {
            println!("Hello from fieldcheck!");
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => check(args, config.schema),
    }
}

fn check(args: CheckArgs, configured: Option<SchemaDef>) -> Result<ExitCode> {
    let def = match &args.schema {
        Some(path) => AppConfig::read_schema(path)?,
        None => configured
            .context("no schema: pass --schema or add a [schema] table to the config file")?,
    };
    let validator = Validator::from_def(&def).context("invalid schema")?;
    tracing::debug!(fields = validator.schema().len(), "schema compiled");

    let bytes = Input::parse(args.input.as_deref()).read()?;

    let record = match Record::from_slice(&bytes) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(error = %err, "input rejected before validation");
            eprintln!("decode error: {err}");
            return Ok(ExitCode::from(EXIT_DECODE));
        }
    };

    match validator.validate(&record) {
        ValidationOutcome::Valid(normalized) => {
            println!("{}", normalized.to_json());
            Ok(ExitCode::SUCCESS)
        }
        ValidationOutcome::Invalid(errors) => {
            tracing::info!(errors = errors.len(), "record rejected");
            println!("{}", errors.to_json());
            Ok(ExitCode::from(EXIT_INVALID))
        }
    }
}
