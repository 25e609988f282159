//! Diagnostic logging setup
//!
//! Status output meant for people goes through `console` on stderr; this
//! subscriber carries the `tracing` events emitted while loading and
//! resolving requests. `RUST_LOG` takes precedence over `--log-level`.

use tracing_subscriber::EnvFilter;

use crate::error::SwapError;

/// Install the global tracing subscriber
pub fn init_logging(level: &str) -> Result<(), SwapError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| SwapError::ConfigurationError {
            message: format!("Invalid log level '{level}': {e}"),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| SwapError::ConfigurationError {
            message: format!("Failed to install log subscriber: {e}"),
        })
}
