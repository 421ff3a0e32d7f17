//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// `FIELDCHECK_LOG` wins over `RUST_LOG`; `FIELDCHECK_LOG_FORMAT` picks the
    /// format. Unknown formats fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("FIELDCHECK_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("FIELDCHECK_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }

        if lookup("NO_COLOR").is_some() {
            config.display.colors = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                target: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_env_gives_defaults() {
        assert_eq!(Config::from_lookup(env(&[])), Config::default());
    }

    #[test]
    fn fieldcheck_log_wins_over_rust_log() {
        let config = Config::from_lookup(env(&[("RUST_LOG", "trace"), ("FIELDCHECK_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let config = Config::from_lookup(env(&[("RUST_LOG", "debug")]));
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn format_and_no_color() {
        let config = Config::from_lookup(env(&[
            ("FIELDCHECK_LOG_FORMAT", "json"),
            ("NO_COLOR", "1"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.colors);
    }

    #[test]
    fn unknown_format_falls_back() {
        let config = Config::from_lookup(env(&[("FIELDCHECK_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
    }
}
