//! Tracing/logging initialization.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `level` is an env-filter directive such as `info` or
/// `thunder_events=debug,tower_http=info`. `format` is `text` or `json`;
/// anything else falls back to text.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a subscriber is already set.
pub fn init(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log filter '{level}'"))?;

    let result = if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}
