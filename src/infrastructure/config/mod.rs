//! Configuration management infrastructure
//!
//! Loading of the OLS YAML configuration document:
//! - YAML parsing into a raw document
//! - Fail-fast construction of the typed tree
//! - Completeness validation
//! - Legacy environment defaults

mod document;
pub mod legacy;
pub mod loader;

pub use legacy::LegacySettings;
pub use loader::{ConfigError, ConfigLoader};
