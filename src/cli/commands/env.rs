//! Implementation of the `ols-config env` command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::or_dash;
use crate::infrastructure::config::legacy::{
    BASE_COMPLETION_MODEL_VAR, ENABLE_UI_VAR, LOGFILE_VAR,
};
use crate::infrastructure::config::LegacySettings;

/// Settings resolved from legacy environment variables
#[derive(Debug, serde::Serialize)]
pub struct EnvOutput {
    /// Resolved values, defaults included
    #[serde(flatten)]
    pub settings: LegacySettings,
}

impl CommandOutput for EnvOutput {
    fn to_human(&self) -> String {
        [
            format!(
                "{LOGFILE_VAR}: {}",
                or_dash(self.settings.logfile.as_ref().map(|p| p.display()))
            ),
            format!("{ENABLE_UI_VAR}: {}", self.settings.enable_ui),
            format!(
                "{BASE_COMPLETION_MODEL_VAR}: {}",
                self.settings.base_completion_model
            ),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the legacy environment settings
pub fn execute(settings: &LegacySettings, json_mode: bool) -> Result<()> {
    let output_data = EnvOutput {
        settings: settings.clone(),
    };
    output(&output_data, json_mode);
    Ok(())
}
