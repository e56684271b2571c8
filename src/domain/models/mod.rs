//! Domain models

pub mod config;

pub use config::{
    Config, ConversationCacheConfig, LlmConfig, LoggerConfig, MemoryConfig, ModelConfig,
    OlsConfig, ProviderConfig, RedisConfig,
};
