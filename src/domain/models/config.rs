//! Typed configuration tree

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration for the OLS service
///
/// Both sections are `None` only when the source document is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// LLM providers and their models
    pub llm_config: Option<LlmConfig>,

    /// Operational settings for the assistant service
    pub ols_config: Option<OlsConfig>,
}

/// LLM provider registry keyed by provider name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LlmConfig {
    /// Providers keyed by their `name`
    pub providers: BTreeMap<String, ProviderConfig>,
}

impl LlmConfig {
    /// Look up a model by provider and model name
    pub fn model(&self, provider: &str, model: &str) -> Option<&ModelConfig> {
        self.providers.get(provider)?.models.get(model)
    }
}

/// A named upstream source of language models
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderConfig {
    /// Provider name, also its key in [`LlmConfig::providers`]
    pub name: String,

    /// Provider endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path to the provider credentials file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_path: Option<PathBuf>,

    /// Models keyed by their `name`
    pub models: BTreeMap<String, ModelConfig>,
}

/// A single model endpoint under a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelConfig {
    /// Model name, also its key in [`ProviderConfig::models`]
    pub name: String,

    /// Model endpoint, overriding the provider's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path to the model credentials file, overriding the provider's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_path: Option<PathBuf>,
}

/// Operational settings for the assistant service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OlsConfig {
    /// Serve the debug UI
    pub enable_debug_ui: bool,

    /// Model used for completions
    pub default_model: Option<String>,

    /// Model used for question classification
    pub classifier_model: Option<String>,

    /// Conversation history backend
    pub conversation_cache: Option<ConversationCacheConfig>,

    /// Service logger settings
    pub logger_config: Option<LoggerConfig>,
}

/// Conversation cache backend selected by the `type` key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "settings", rename_all = "lowercase")]
pub enum ConversationCacheConfig {
    /// Redis-compatible store
    Redis(RedisConfig),

    /// In-process store
    Memory(MemoryConfig),

    /// No `type` given
    #[default]
    Unset,
}

impl ConversationCacheConfig {
    /// Type name as written in the configuration document
    pub const fn cache_type(&self) -> Option<&'static str> {
        match self {
            Self::Redis(_) => Some("redis"),
            Self::Memory(_) => Some("memory"),
            Self::Unset => None,
        }
    }

    /// Redis settings, when the cache is Redis-backed
    pub const fn redis(&self) -> Option<&RedisConfig> {
        match self {
            Self::Redis(redis) => Some(redis),
            _ => None,
        }
    }

    /// Memory settings, when the cache is in-process
    pub const fn memory(&self) -> Option<&MemoryConfig> {
        match self {
            Self::Memory(memory) => Some(memory),
            _ => None,
        }
    }
}

/// Redis conversation cache settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RedisConfig {
    /// Server host
    pub host: Option<String>,

    /// Server port
    pub port: Option<u16>,

    /// Memory ceiling, e.g. `500mb`
    pub max_memory: Option<String>,

    /// Eviction policy, e.g. `allkeys-lru`
    pub max_memory_policy: Option<String>,
}

/// In-memory conversation cache settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MemoryConfig {
    /// Maximum number of cached conversations
    pub max_entries: Option<u64>,
}

/// Service logger settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggerConfig {
    /// Log level name, e.g. `INFO`
    pub level: Option<String>,

    /// Log file path; unset disables file logging
    pub filename: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_accessors() {
        let redis = ConversationCacheConfig::Redis(RedisConfig {
            host: Some("localhost".to_string()),
            ..Default::default()
        });
        assert_eq!(redis.cache_type(), Some("redis"));
        assert_eq!(redis.redis().and_then(|r| r.host.as_deref()), Some("localhost"));
        assert!(redis.memory().is_none());

        let memory = ConversationCacheConfig::Memory(MemoryConfig {
            max_entries: Some(10),
        });
        assert_eq!(memory.cache_type(), Some("memory"));
        assert_eq!(memory.memory().and_then(|m| m.max_entries), Some(10));
        assert!(memory.redis().is_none());

        let unset = ConversationCacheConfig::default();
        assert_eq!(unset.cache_type(), None);
        assert!(unset.redis().is_none());
        assert!(unset.memory().is_none());
    }

    #[test]
    fn test_default_mappings_are_not_shared() {
        let mut first = LlmConfig::default();
        first.providers.insert(
            "openai".to_string(),
            ProviderConfig {
                name: "openai".to_string(),
                url: None,
                credential_path: None,
                models: BTreeMap::new(),
            },
        );

        let second = LlmConfig::default();
        assert_eq!(first.providers.len(), 1);
        assert!(second.providers.is_empty());
    }

    #[test]
    fn test_model_lookup() {
        let mut models = BTreeMap::new();
        models.insert(
            "gpt-4".to_string(),
            ModelConfig {
                name: "gpt-4".to_string(),
                url: None,
                credential_path: None,
            },
        );
        let mut providers = BTreeMap::new();
        providers.insert(
            "openai".to_string(),
            ProviderConfig {
                name: "openai".to_string(),
                url: None,
                credential_path: None,
                models,
            },
        );
        let llm = LlmConfig { providers };

        assert!(llm.model("openai", "gpt-4").is_some());
        assert!(llm.model("openai", "gpt-3").is_none());
        assert!(llm.model("bam", "gpt-4").is_none());
    }

    #[test]
    fn test_cache_serializes_with_type_tag() {
        let cache = ConversationCacheConfig::Memory(MemoryConfig {
            max_entries: Some(100),
        });
        let json = serde_json::to_value(&cache).unwrap();
        assert_eq!(json["type"], "memory");
        assert_eq!(json["settings"]["max_entries"], 100);
    }
}
