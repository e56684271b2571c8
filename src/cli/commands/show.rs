//! Implementation of the `ols-config show` command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::{models_table, or_dash, ModelRow};
use crate::domain::models::{Config, ConversationCacheConfig};

/// The loaded configuration, rendered as a model table plus OLS settings
#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    /// Configuration as built by the loader
    #[serde(flatten)]
    pub config: Config,
}

impl ShowOutput {
    fn models_section(&self) -> String {
        let rows = self
            .config
            .llm_config
            .as_ref()
            .map(ModelRow::collect)
            .unwrap_or_default();
        models_table(&rows)
    }

    fn ols_section(&self) -> String {
        let Some(ols) = &self.config.ols_config else {
            return "OLS settings: not configured".to_string();
        };

        let mut lines = vec![
            "OLS settings:".to_string(),
            format!("  debug UI:         {}", ols.enable_debug_ui),
            format!("  default model:    {}", or_dash(ols.default_model.as_ref())),
            format!("  classifier model: {}", or_dash(ols.classifier_model.as_ref())),
        ];

        let cache = match &ols.conversation_cache {
            None => "-".to_string(),
            Some(ConversationCacheConfig::Unset) => "unset".to_string(),
            Some(ConversationCacheConfig::Memory(memory)) => {
                format!("memory (max entries: {})", or_dash(memory.max_entries))
            }
            Some(ConversationCacheConfig::Redis(redis)) => format!(
                "redis ({}:{}, max memory: {}, policy: {})",
                or_dash(redis.host.as_ref()),
                or_dash(redis.port),
                or_dash(redis.max_memory.as_ref()),
                or_dash(redis.max_memory_policy.as_ref()),
            ),
        };
        lines.push(format!("  conversation cache: {cache}"));

        if let Some(logger) = &ols.logger_config {
            lines.push(format!(
                "  logger:           level {}, file {}",
                or_dash(logger.level.as_ref()),
                or_dash(logger.filename.as_ref().map(|p| p.display())),
            ));
        }

        lines.join("\n")
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        format!("{}\n\n{}", self.models_section(), self.ols_section())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the loaded configuration
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let output_data = ShowOutput {
        config: config.clone(),
    };
    output(&output_data, json_mode);
    Ok(())
}
