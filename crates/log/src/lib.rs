//! # fieldcheck-log
//!
//! Subscriber setup for fieldcheck binaries. Libraries in the workspace only
//! emit `tracing` events; this crate decides where they go.
//!
//! ```no_run
//! use fieldcheck_log::{Config, LoggerBuilder};
//!
//! LoggerBuilder::from_config(Config::from_env()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), fieldcheck_log::LogError>(())
//! ```
//!
//! Output always goes to stderr so stdout stays free for program output.

mod builder;
mod config;
mod core;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use crate::core::{LogError, LogResult};
