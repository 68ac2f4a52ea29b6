//! Subscriber installation.

use arcade_core::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Build the level filter for a config.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}

/// Install the global subscriber.
///
/// Output goes to stderr so it never mixes with data a host writes to
/// stdout.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    result.map_err(|e| LoggingError::Install(e.to_string()))?;
    debug!(level = %config.level, format = ?config.format, "log subscriber installed");
    Ok(())
}
