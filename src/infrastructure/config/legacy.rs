//! Environment-derived defaults kept for older deployments
//!
//! These predate the YAML document. Only `OLS_LOGFILE` is still consulted, as
//! the log file fallback when `logger_config.filename` is unset.

use serde::Serialize;
use std::path::PathBuf;
use tracing::trace;

/// Log file path; unset disables file logging
pub const LOGFILE_VAR: &str = "OLS_LOGFILE";

/// `true`/`false` switch for the local UI
pub const ENABLE_UI_VAR: &str = "OLS_ENABLE_UI";

/// Default completion model identifier
pub const BASE_COMPLETION_MODEL_VAR: &str = "BASE_COMPLETION_MODEL";

/// Completion model used when `BASE_COMPLETION_MODEL` is unset
pub const DEFAULT_COMPLETION_MODEL: &str = "ibm/granite-20b-instruct-v1";

/// Settings resolved from the process environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacySettings {
    /// `OLS_LOGFILE`
    pub logfile: Option<PathBuf>,

    /// `OLS_ENABLE_UI`, true unless set to something other than `true`
    pub enable_ui: bool,

    /// `BASE_COMPLETION_MODEL`
    pub base_completion_model: String,
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self {
            logfile: None,
            enable_ui: true,
            base_completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }
}

impl LegacySettings {
    /// Load `.env` if present, then read settings from the environment
    pub fn from_env() -> Self {
        match dotenv::dotenv() {
            Ok(path) => trace!(path = %path.display(), "loaded .env file"),
            Err(err) => trace!(error = %err, "no .env file loaded"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            logfile: lookup(LOGFILE_VAR)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            enable_ui: lookup(ENABLE_UI_VAR)
                .map_or(defaults.enable_ui, |value| value.eq_ignore_ascii_case("true")),
            base_completion_model: lookup(BASE_COMPLETION_MODEL_VAR)
                .unwrap_or(defaults.base_completion_model),
        }
    }
}
