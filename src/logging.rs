use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Errors that can occur while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logging already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Build the level filter; `RUST_LOG` wins over the configured level
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&settings.level)?),
    }
}

/// Install a global fmt subscriber
///
/// `format = "pretty"` gives human-readable multi-line output, anything
/// else emits JSON lines.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = build_filter(settings)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.json().try_init()
    };

    result.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}
