//! OLS configuration CLI entry point.

use anyhow::Result;
use clap::Parser;

use ols_config::cli::{commands, Cli, Commands};
use ols_config::infrastructure::config::{ConfigLoader, LegacySettings};
use ols_config::infrastructure::logging::{bootstrap_subscriber, LogConfig, LogFormat, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let legacy = tracing::subscriber::with_default(
        bootstrap_subscriber(std::io::stderr),
        LegacySettings::from_env,
    );

    let result = match cli.command {
        Commands::Env => commands::env::execute(&legacy, cli.json),
        Commands::Check | Commands::Show => run_with_config(&cli, &legacy),
    };

    if let Err(err) = result {
        ols_config::cli::handle_error(err, cli.json);
    }
}

fn run_with_config(cli: &Cli, legacy: &LegacySettings) -> Result<()> {
    // Exits with status 1 when the file cannot be loaded
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        ConfigLoader::load(&cli.config)
    });

    let logger_config = config
        .ols_config
        .as_ref()
        .and_then(|ols| ols.logger_config.as_ref());
    let mut log_config = LogConfig::resolve(logger_config, legacy);
    if cli.json {
        log_config.format = LogFormat::Json;
    }
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Show => commands::show::execute(&config, cli.json),
        _ => commands::check::execute(&config, &cli.config, cli.json),
    }
}
