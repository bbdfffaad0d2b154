//! Structured logging initialization
//!
//! Installs a `tracing` subscriber configured from `URITREE_LOG_*`
//! environment variables. Output goes to stderr so that command output on
//! stdout can be piped into other tools.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::runtime_config::parse_bool;

/// Log format: JSON for machine consumption, pretty-print for terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }

    /// Unknown names fall back to pretty. No subscriber exists yet when this
    /// runs, so the warning goes straight to stderr.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::from_name(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log format '{s}', using pretty");
            LogFormat::Pretty
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Extra filter directives (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("URITREE_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: lookup("URITREE_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.format),
            target_filter: lookup("URITREE_LOG_TARGET_FILTER").filter(|v| !v.trim().is_empty()),
            include_location: lookup("URITREE_LOG_INCLUDE_LOCATION")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.include_location),
        }
    }

    /// Development preset: debug level with source locations
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
        }
    }

    /// Parsed level; unknown strings fall back to INFO.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Filter built from the level and target directives.
    ///
    /// `RUST_LOG`, when set, replaces the configured level. Invalid target
    /// directives are skipped.
    pub fn env_filter(&self) -> EnvFilter {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if filter.is_empty() {
                    continue;
                }
                match filter.parse() {
                    Ok(directive) => env_filter = env_filter.add_directive(directive),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {filter}"),
                }
            }
        }
        env_filter
    }
}

/// Initialize logging from the environment
///
/// ```no_run
/// uritree::logging::init_logging().expect("Failed to initialize logging");
/// ```
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LogConfig::from_env())
}

/// Initialize logging with an explicit configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_span_list(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.target_filter.is_none());
        assert!(!config.include_location);
    }

    #[test]
    fn test_log_config_from_variables() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("URITREE_LOG_LEVEL", "debug"),
            ("URITREE_LOG_FORMAT", "JSON"),
            ("URITREE_LOG_TARGET_FILTER", "uritree::model=trace"),
            ("URITREE_LOG_INCLUDE_LOCATION", "true"),
        ]));
        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.target_filter.as_deref(), Some("uritree::model=trace"));
        assert!(config.include_location);
    }

    #[test]
    fn test_blank_target_filter_is_ignored() {
        let config = LogConfig::from_lookup(lookup_from(&[("URITREE_LOG_TARGET_FILTER", "  ")]));
        assert!(config.target_filter.is_none());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("invalid"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name(" Pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::from_name("jsn"), None);
    }

    #[test]
    fn test_level_fallback() {
        let config = LogConfig {
            log_level: "loud".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(config.level(), Level::INFO);
        assert_eq!(LogConfig::default_dev().level(), Level::DEBUG);
    }

    #[test]
    fn test_env_filter_accepts_mixed_directives() {
        let config = LogConfig {
            target_filter: Some("uritree=debug, not a directive ,".to_string()),
            ..LogConfig::default()
        };
        let _filter = config.env_filter();
    }
}
