//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Level and file settings from `logger_config`
//! - Human-readable or JSON console output
//! - JSON file output through a non-blocking writer

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::{bootstrap_subscriber, LoggerImpl};
