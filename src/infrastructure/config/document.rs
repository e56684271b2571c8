//! Raw document shape and typed tree construction
//!
//! The document is deserialized with every key optional, then each section is
//! built bottom-up. The first missing mandatory section aborts the whole build.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::loader::ConfigError;
use crate::domain::models::{
    Config, ConversationCacheConfig, LlmConfig, LoggerConfig, MemoryConfig, ModelConfig,
    OlsConfig, ProviderConfig, RedisConfig,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
    llm_providers: Option<Vec<Option<RawProvider>>>,
    ols_config: Option<RawOlsConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProvider {
    name: Option<String>,
    url: Option<String>,
    credential_path: Option<PathBuf>,
    models: Option<Vec<Option<RawModel>>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawModel {
    name: Option<String>,
    url: Option<String>,
    credential_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOlsConfig {
    enable_debug_ui: Option<bool>,
    default_model: Option<String>,
    classifier_model: Option<String>,
    conversation_cache: Option<RawCacheConfig>,
    logger_config: Option<LoggerConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCacheConfig {
    #[serde(rename = "type")]
    cache_type: Option<String>,
    redis: Option<RedisConfig>,
    memory: Option<MemoryConfig>,
}

impl RawConfig {
    /// Build the typed configuration tree
    pub(crate) fn build(self) -> Result<Config, ConfigError> {
        let llm_config = build_llm_config(self.llm_providers)?;
        let ols_config = self.ols_config.map_or_else(
            || {
                warn!("ols_config section is missing");
                Ok(OlsConfig::default())
            },
            RawOlsConfig::build,
        )?;

        Ok(Config {
            llm_config: Some(llm_config),
            ols_config: Some(ols_config),
        })
    }
}

fn build_llm_config(
    providers: Option<Vec<Option<RawProvider>>>,
) -> Result<LlmConfig, ConfigError> {
    let providers = match providers {
        Some(providers) if !providers.is_empty() => providers,
        _ => {
            return Err(ConfigError::EmptySection {
                section: "llm providers".to_string(),
                context: None,
            })
        }
    };

    let mut llm_config = LlmConfig::default();
    for (index, provider) in providers.into_iter().enumerate() {
        let provider = provider.ok_or_else(|| ConfigError::MissingSection {
            section: "provider".to_string(),
            context: Some(format!("llm_providers entry {index}")),
        })?;
        let provider = provider.build()?;

        if llm_config.providers.contains_key(&provider.name) {
            debug!(provider = %provider.name, "duplicate provider replaces earlier entry");
        }
        llm_config.providers.insert(provider.name.clone(), provider);
    }

    Ok(llm_config)
}

impl RawProvider {
    fn build(self) -> Result<ProviderConfig, ConfigError> {
        let name = self.name.ok_or_else(|| ConfigError::MissingField {
            field: "provider name".to_string(),
            context: None,
        })?;
        let scope = format!("provider {name}");

        let entries = match self.models {
            Some(models) if !models.is_empty() => models,
            _ => {
                return Err(ConfigError::EmptySection {
                    section: "models".to_string(),
                    context: Some(scope),
                })
            }
        };

        let mut models = BTreeMap::new();
        for model in entries {
            let model = model.ok_or_else(|| ConfigError::MissingSection {
                section: "model".to_string(),
                context: Some(scope.clone()),
            })?;
            let model = model.build(&scope)?;
            models.insert(model.name.clone(), model);
        }

        debug!(provider = %name, models = models.len(), "provider configured");
        Ok(ProviderConfig {
            name,
            url: self.url,
            credential_path: self.credential_path,
            models,
        })
    }
}

impl RawModel {
    fn build(self, scope: &str) -> Result<ModelConfig, ConfigError> {
        let name = self.name.ok_or_else(|| ConfigError::MissingField {
            field: "model name".to_string(),
            context: Some(scope.to_string()),
        })?;

        Ok(ModelConfig {
            name,
            url: self.url,
            credential_path: self.credential_path,
        })
    }
}

impl RawOlsConfig {
    fn build(self) -> Result<OlsConfig, ConfigError> {
        let conversation_cache = self.conversation_cache.unwrap_or_default().build()?;

        Ok(OlsConfig {
            enable_debug_ui: self.enable_debug_ui.unwrap_or(false),
            default_model: self.default_model,
            classifier_model: self.classifier_model,
            conversation_cache: Some(conversation_cache),
            logger_config: Some(self.logger_config.unwrap_or_default()),
        })
    }
}

impl RawCacheConfig {
    fn build(self) -> Result<ConversationCacheConfig, ConfigError> {
        match self.cache_type.as_deref() {
            None => Ok(ConversationCacheConfig::Unset),
            Some("redis") => self
                .redis
                .map(ConversationCacheConfig::Redis)
                .ok_or_else(|| ConfigError::MissingSection {
                    section: "redis".to_string(),
                    context: None,
                }),
            Some("memory") => self
                .memory
                .map(ConversationCacheConfig::Memory)
                .ok_or_else(|| ConfigError::MissingSection {
                    section: "memory".to_string(),
                    context: None,
                }),
            Some(other) => Err(ConfigError::InvalidValue {
                field: "conversation_cache.type".to_string(),
                value: other.to_string(),
                reason: "Must be one of: redis, memory".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_model(name: &str) -> Option<RawModel> {
        Some(RawModel {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_provider_name_checked_before_models() {
        let provider = RawProvider::default();
        match provider.build() {
            Err(ConfigError::MissingField { field, .. }) => assert_eq!(field, "provider name"),
            other => panic!("Expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_provider_keeps_last_duplicate_model() {
        let provider = RawProvider {
            name: Some("bam".to_string()),
            models: Some(vec![
                Some(RawModel {
                    name: Some("granite".to_string()),
                    url: Some("https://first".to_string()),
                    credential_path: None,
                }),
                Some(RawModel {
                    name: Some("granite".to_string()),
                    url: Some("https://second".to_string()),
                    credential_path: None,
                }),
            ]),
            ..Default::default()
        };

        let provider = provider.build().unwrap();
        assert_eq!(provider.models.len(), 1);
        assert_eq!(
            provider.models["granite"].url.as_deref(),
            Some("https://second")
        );
    }

    #[test]
    fn test_null_model_entry_is_rejected() {
        let provider = RawProvider {
            name: Some("bam".to_string()),
            models: Some(vec![raw_model("granite"), None]),
            ..Default::default()
        };

        let err = provider.build().unwrap_err();
        assert_eq!(err.to_string(), "model config is missing for provider bam");
    }

    #[test]
    fn test_cache_without_type_is_unset() {
        let cache = RawCacheConfig {
            memory: Some(MemoryConfig {
                max_entries: Some(5),
            }),
            ..Default::default()
        };
        assert_eq!(cache.build().unwrap(), ConversationCacheConfig::Unset);
    }

    #[test]
    fn test_cache_ignores_block_for_other_type() {
        let cache = RawCacheConfig {
            cache_type: Some("memory".to_string()),
            redis: Some(RedisConfig::default()),
            memory: Some(MemoryConfig::default()),
        };
        assert_eq!(
            cache.build().unwrap(),
            ConversationCacheConfig::Memory(MemoryConfig::default())
        );
    }

    #[test]
    fn test_missing_ols_section_builds_empty_node() {
        let raw = RawConfig {
            llm_providers: Some(vec![Some(RawProvider {
                name: Some("openai".to_string()),
                models: Some(vec![raw_model("gpt-4")]),
                ..Default::default()
            })]),
            ols_config: None,
        };

        let config = raw.build().unwrap();
        let ols = config.ols_config.unwrap();
        assert!(!ols.enable_debug_ui);
        assert!(ols.conversation_cache.is_none());
        assert!(ols.logger_config.is_none());
    }
}
