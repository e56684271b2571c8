//! Configuration errors and the YAML loader

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

use super::document::RawConfig;
use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required key such as a provider or model `name` is absent
    #[error("{field} is missing{}", scoped(.context))]
    MissingField {
        /// Human-readable key name, e.g. `model name`
        field: String,
        /// Entity the key belongs to, e.g. `provider openai`
        context: Option<String>,
    },

    /// A mandatory section or list entry is absent or null
    #[error("{section} config is missing{}", scoped(.context))]
    MissingSection {
        /// Section name, e.g. `redis`
        section: String,
        /// Entity the section belongs to
        context: Option<String>,
    },

    /// A list that needs at least one entry is absent or empty
    #[error("no {section} configured{}", scoped(.context))]
    EmptySection {
        /// List name, e.g. `models`
        section: String,
        /// Entity the list belongs to
        context: Option<String>,
    },

    /// A key holds a value outside its allowed set
    #[error("Invalid {field}: {value}. {reason}")]
    InvalidValue {
        /// Dotted key path
        field: String,
        /// Offending value
        value: String,
        /// Allowed values
        reason: String,
    },

    /// A built configuration lacks a section needed at runtime
    #[error("{0}")]
    Incomplete(String),

    /// Malformed YAML or a value of the wrong type
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration file could not be read
    #[error("Failed to read configuration file {}", .path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

fn scoped(context: &Option<String>) -> String {
    context
        .as_ref()
        .map(|context| format!(" for {context}"))
        .unwrap_or_default()
}

/// Configuration loader for the OLS YAML document
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration at startup, terminating the process on failure
    ///
    /// The error and its full source chain are written to stdout and the
    /// process exits with status 1. Use [`ConfigLoader::load_from_file`] for a
    /// recoverable result.
    pub fn load(path: impl AsRef<Path>) -> Config {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load configuration");
                println!("Failed to load config file {}: {err}", path.display());
                println!("{:?}", anyhow::Error::new(err));
                std::process::exit(1);
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&source)?;
        info!(
            path = %path.display(),
            providers = config.llm_config.as_ref().map_or(0, |llm| llm.providers.len()),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parse and build configuration from a YAML document
    ///
    /// Merge keys (`<<: *anchor`) are resolved before the tree is built. An
    /// empty or `null` document yields a [`Config`] with both sections unset,
    /// which [`ConfigLoader::validate`] rejects.
    pub fn parse(source: &str) -> Result<Config, ConfigError> {
        if source.trim().is_empty() {
            debug!("configuration document is empty");
            return Ok(Config::default());
        }

        let mut value: serde_yaml::Value = serde_yaml::from_str(source)?;
        if value.is_null() {
            debug!("configuration document is empty");
            return Ok(Config::default());
        }

        value.apply_merge()?;
        let raw: RawConfig = serde_yaml::from_value(value)?;
        raw.build()
    }

    /// Validate that a built configuration is complete
    ///
    /// Checks run in order and stop at the first failure.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let Some(llm_config) = &config.llm_config else {
            return Err(ConfigError::Incomplete("no llm config found".to_string()));
        };

        if llm_config.providers.is_empty() {
            return Err(ConfigError::Incomplete("no llm providers found".to_string()));
        }

        let Some(ols_config) = &config.ols_config else {
            return Err(ConfigError::Incomplete("no ols config found".to_string()));
        };

        if ols_config.default_model.is_none() {
            return Err(ConfigError::Incomplete("default model is not set".to_string()));
        }

        if ols_config.classifier_model.is_none() {
            return Err(ConfigError::Incomplete(
                "classifier model is not set".to_string(),
            ));
        }

        if ols_config.conversation_cache.is_none() {
            return Err(ConfigError::Incomplete(
                "conversation cache is not set".to_string(),
            ));
        }

        if ols_config.logger_config.is_none() {
            return Err(ConfigError::Incomplete("logger config is not set".to_string()));
        }

        Ok(())
    }
}
