//! Subscriber setup for the startup phase and the configured logger

use super::config::{LogConfig, LogFormat};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger implementation using tracing
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Initialize the global logger with the given configuration
    ///
    /// `RUST_LOG` directives take precedence over the configured level. The
    /// returned value must be kept alive for file output to be flushed.
    ///
    /// # Errors
    /// Returns an error if the level is unknown, the log file name is invalid,
    /// or a global subscriber is already installed.
    pub fn init(config: &LogConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if let Some(ref log_file) = config.log_file {
            let (directory, file_name) = split_log_path(log_file)?;
            let (non_blocking_file, file_guard) =
                tracing_appender::non_blocking(rolling::never(directory, file_name));

            // File output is always JSON
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .boxed(),
            );
            guard = Some(file_guard);
        }

        if config.enable_console {
            let console_layer: BoxedLayer = match config.format {
                LogFormat::Json => tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .boxed(),
                LogFormat::Pretty => tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .boxed(),
            };
            layers.push(console_layer);
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(env_filter)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        tracing::debug!(
            level = %config.level,
            format = ?config.format,
            file_output = config.log_file.is_some(),
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }
}

/// Build the subscriber used before the configured logger exists
///
/// Startup events (environment loading, a failed configuration load) happen
/// before `logger_config` is known. Scope this subscriber around them with
/// [`tracing::subscriber::with_default`]; it writes plain text at `WARN`
/// unless `RUST_LOG` says otherwise.
pub fn bootstrap_subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .finish()
}

/// Parse a log level name to a filter
///
/// Accepts the level names used in existing deployments (`WARNING`,
/// `CRITICAL`, `NOTSET`) alongside the tracing ones. `NOTSET` lets every
/// event through.
fn parse_log_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "trace" | "notset" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" | "critical" => Ok(LevelFilter::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_log_level("WARNING").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_log_level("error").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_log_level("CRITICAL").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_log_level("NOTSET").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_log_level("notset").unwrap(), LevelFilter::TRACE);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_split_log_path() {
        let (directory, file_name) = split_log_path(Path::new("/var/log/ols.log")).unwrap();
        assert_eq!(directory, Path::new("/var/log"));
        assert_eq!(file_name, "ols.log");

        let (directory, file_name) = split_log_path(Path::new("ols.log")).unwrap();
        assert_eq!(directory, Path::new("."));
        assert_eq!(file_name, "ols.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_bootstrap_subscriber_captures_startup_errors() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();

        temp_env::with_var_unset("RUST_LOG", || {
            let subscriber = bootstrap_subscriber(move || writer.clone());
            tracing::subscriber::with_default(subscriber, || {
                tracing::error!(path = "olsconfig.yaml", "failed to load configuration");
                tracing::info!("configuration loaded");
            });
        });

        let logged = buffer.contents();
        assert!(logged.contains("failed to load configuration"), "{logged}");
        assert!(logged.contains("olsconfig.yaml"), "{logged}");
        assert!(!logged.contains("configuration loaded"), "{logged}");
    }

    #[test]
    fn test_init_rejects_invalid_level() {
        let config = LogConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(LoggerImpl::init(&config).is_err());
    }
}
