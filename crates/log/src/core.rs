//! Error types

use thiserror::Error;

/// Logger setup failure.
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive string does not parse.
    #[error("invalid log filter '{0}'")]
    Filter(String),

    /// An unknown output format name.
    #[error("unknown log format '{0}', expected pretty, compact or json")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;
