//! Infrastructure layer module
//!
//! This module contains the adapters to the outside world:
//! - Configuration loading (YAML documents, environment variables)
//! - Logging infrastructure

pub mod config;
pub mod logging;
