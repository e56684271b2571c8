//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "olsconfig.yaml";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ols-config")]
#[command(about = "Load and validate OLS service configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the YAML configuration file
    #[arg(short, long, global = true, env = "OLS_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Load the configuration and check that it is complete
    Check,

    /// Show the loaded configuration
    Show,

    /// Show settings resolved from legacy environment variables
    Env,
}
