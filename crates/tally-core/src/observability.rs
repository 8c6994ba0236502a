//! Logging setup (`tracing` + `tracing-subscriber`).
//!
//! Logs always go to stderr; stdout is left for encoded events.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::MetricsConfig;
use crate::domain::MetricsError;

/// Installs the global subscriber. Fails (instead of panicking) when the
/// filter is invalid or a subscriber is already installed.
pub fn init_tracing(config: &MetricsConfig) -> Result<(), MetricsError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| MetricsError::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| MetricsError::Logging(e.to_string()))?;

    tracing::debug!(
        source = %config.source,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
