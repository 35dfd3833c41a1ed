use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::TelemetryError;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
/// Output goes to stderr so reports on stdout stay clean.
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|source| {
            TelemetryError::EnvFilter {
                value: config.level.clone(),
                source,
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| TelemetryError::Subscriber(e.into()))
}
