//! Configuration from environment variables.

use std::env;

use crate::domain::{MetricsError, Source};

pub const DEFAULT_SOURCE: &str = "tally";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for emitting metrics and for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    /// `Source` written into every envelope.
    pub source: String,

    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive).
    pub log_level: String,

    /// JSON formatted logs instead of human-readable ones.
    pub json_logs: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TALLY_SOURCE`: source name (default: tally)
    /// - `TALLY_LOG_LEVEL` or `RUST_LOG`: log level (default: info)
    /// - `TALLY_JSON_LOGS`: JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            source: lookup("TALLY_SOURCE")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.source),

            log_level: lookup("TALLY_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("TALLY_JSON_LOGS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    pub fn source(&self) -> Result<Source, MetricsError> {
        Source::new(self.source.clone())
    }
}
