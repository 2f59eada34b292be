use std::io;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level {level:?}: {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("failed to initialize logging: {0}")]
    Initialization(String),
}

/// Install a stderr subscriber filtered by `level` (any `EnvFilter`
/// directive). Stdout is left to the lookup output.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        reason: e.to_string(),
    })?;

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console)
        .try_init()
        .map_err(|e| LoggingError::Initialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_level() {
        assert!(matches!(
            init_logging("geolocate=notalevel"),
            Err(LoggingError::InvalidLogLevel { .. })
        ));
    }
}
