//! Implementation of the `ols-config check` command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Result of a successful `check`
#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    /// Always true; failures are reported through `handle_error`
    pub success: bool,
    /// Summary line
    pub message: String,
    /// File that was checked
    pub config_path: PathBuf,
    /// Number of configured providers
    pub providers: usize,
    /// Number of models across all providers
    pub models: usize,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "{}\n  providers: {}\n  models:    {}",
            self.message, self.providers, self.models
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Validate a loaded configuration and report provider and model counts
///
/// # Errors
/// Returns the first failed completeness check, with the file path as context.
pub fn execute(config: &Config, config_path: &Path, json_mode: bool) -> Result<()> {
    ConfigLoader::validate(config)
        .with_context(|| format!("Configuration {} is incomplete", config_path.display()))?;

    let (providers, models) = config.llm_config.as_ref().map_or((0, 0), |llm| {
        (
            llm.providers.len(),
            llm.providers.values().map(|p| p.models.len()).sum(),
        )
    });

    let output_data = CheckOutput {
        success: true,
        message: format!("Configuration {} is valid.", config_path.display()),
        config_path: config_path.to_path_buf(),
        providers,
        models,
    };
    output(&output_data, json_mode);
    Ok(())
}
