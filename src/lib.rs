//! OLS configuration loader
//!
//! Loads the OLS service configuration (LLM providers and models, the
//! conversation cache backend, logging) from a YAML document and checks that
//! it is complete.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): The typed, immutable configuration tree
//! - **Infrastructure Layer** (`infrastructure`): YAML loading, legacy
//!   environment defaults, logger setup
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use ols_config::ConfigLoader;
//!
//! let config = ConfigLoader::load_from_file("olsconfig.yaml")?;
//! ConfigLoader::validate(&config)?;
//! # Ok::<(), ols_config::ConfigError>(())
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ConversationCacheConfig, LlmConfig, LoggerConfig, MemoryConfig, ModelConfig,
    OlsConfig, ProviderConfig, RedisConfig,
};
pub use infrastructure::config::{ConfigError, ConfigLoader, LegacySettings};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
