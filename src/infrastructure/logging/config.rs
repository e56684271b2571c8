//! Logging settings resolved from the loaded configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::models::LoggerConfig;
use crate::infrastructure::config::LegacySettings;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Log file (optional, if None logs only to the console)
    pub log_file: Option<PathBuf>,

    /// Enable console logging on stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,
}

/// Console output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable text
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_file: None,
            enable_console: true,
        }
    }
}

impl LogConfig {
    /// Resolve logging settings from the loaded `logger_config`
    ///
    /// `OLS_LOGFILE` is used when the document does not name a file.
    pub fn resolve(logger: Option<&LoggerConfig>, legacy: &LegacySettings) -> Self {
        let defaults = Self::default();
        Self {
            level: logger
                .and_then(|logger| logger.level.clone())
                .unwrap_or(defaults.level),
            log_file: logger
                .and_then(|logger| logger.filename.clone())
                .or_else(|| legacy.logfile.clone()),
            ..defaults
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}

const fn default_true() -> bool {
    true
}
