//! Model listing for `show`, one row per provider/model pair.

use comfy_table::{presets, ContentArrangement, Table};
use console::style;

use crate::domain::models::LlmConfig;

const HEADERS: [&str; 4] = ["Provider", "Model", "URL", "Credentials"];

/// A model with the endpoint and credentials it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRow {
    /// Provider name
    pub provider: String,
    /// Model name
    pub model: String,
    /// Model URL, else the provider's
    pub url: Option<String>,
    /// Model credentials file, else the provider's
    pub credentials: Option<String>,
}

impl ModelRow {
    /// Flatten providers into rows, ordered by provider then model name
    pub fn collect(llm: &LlmConfig) -> Vec<Self> {
        llm.providers
            .values()
            .flat_map(|provider| {
                provider.models.values().map(move |model| Self {
                    provider: provider.name.clone(),
                    model: model.name.clone(),
                    url: model.url.clone().or_else(|| provider.url.clone()),
                    credentials: model
                        .credential_path
                        .as_ref()
                        .or(provider.credential_path.as_ref())
                        .map(|path| path.display().to_string()),
                })
            })
            .collect()
    }

    fn cells(&self) -> [String; 4] {
        [
            self.provider.clone(),
            self.model.clone(),
            or_dash(self.url.as_ref()),
            or_dash(self.credentials.as_ref()),
        ]
    }
}

/// Render model rows under a `N model(s) configured:` line
pub fn models_table(rows: &[ModelRow]) -> String {
    if rows.is_empty() {
        return "No models configured.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);
    for row in rows {
        table.add_row(row.cells());
    }

    let noun = if rows.len() == 1 { "model" } else { "models" };
    format!("{} {noun} configured:\n{table}", style(rows.len()).bold())
}

/// Display an optional value, using `-` when unset
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
