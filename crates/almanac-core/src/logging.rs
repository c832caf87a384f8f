//! Tracing setup for host applications.
//!
//! The library itself only emits events; installing a subscriber is the
//! embedding application's call. `RUST_LOG` takes precedence over the
//! configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// ## Summary
/// Installs the global tracing subscriber with an env-filter derived
/// from `RUST_LOG`, falling back to the configured level.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
