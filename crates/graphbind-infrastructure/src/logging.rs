//! Structured logging with tracing
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`, optional
//! JSON output and an optional daily-rolling log file.

use std::ffi::OsStr;
use std::path::Path;

use graphbind_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_CONFIG_DIR, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// `GRAPHBIND_LOG` takes precedence over `config.level` when set. Fails
/// with [`Error::Configuration`] when a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| OsStr::new(DEFAULT_CONFIG_DIR)),
        )
    });

    // The layer types differ per format, hence the separate branches.
    let registry = Registry::default().with(filter);
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_thread_names(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry
            .with(stdout)
            .with(file)
            .try_init()
            .config_context("Failed to install log subscriber")?;
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_names(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry
            .with(stdout)
            .with(file)
            .try_init()
            .config_context("Failed to install log subscriber")?;
    }

    info!("Logging initialized with level: {level}");
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
