//! Layered application configuration.
//!
//! Defaults, then the TOML file, then `FIELDCHECK_*` environment variables
//! (`FIELDCHECK_LOG__LEVEL` sets `log.level`). Command-line flags are applied
//! last by the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format as _, Toml},
};
use fieldcheck_validator::schema::SchemaDef;
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fieldcheck.toml";

/// Environment prefix for nested config keys.
const ENV_PREFIX: &str = "FIELDCHECK_";

/// Keys under [`ENV_PREFIX`] that belong to clap, not to the config tree.
const ENV_RESERVED: &[&str] = &["log", "log_format", "config"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[log]` table.
    pub log: Option<fieldcheck_log::Config>,
    /// `[schema]` table.
    pub schema: Option<SchemaDef>,
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let mut figment = Figment::new();
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "loading config file");
            figment = figment.merge(Toml::file(file));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").ignore(ENV_RESERVED));

        figment.extract().context("invalid configuration")
    }

    /// Reads a schema definition file, choosing the parser by extension.
    pub fn read_schema(path: &Path) -> Result<SchemaDef> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema {}", path.display()))?;

        let def = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => SchemaDef::from_json_str(&text),
            _ => SchemaDef::from_toml_str(&text),
        };
        def.with_context(|| format!("invalid schema {}", path.display()))
    }
}
