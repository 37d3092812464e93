#![forbid(unsafe_code)]

//! Structured logging bootstrap (requires the `tracing-json` feature).
//!
//! Library crates in this workspace only emit `tracing` events; installing a
//! subscriber is the host's call. This helper installs a JSON formatter
//! filtered by `RUST_LOG` (default `info`) for hosts that have no subscriber
//! of their own.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable consulted for the filter directive.
pub const LOG_ENV: &str = "RUST_LOG";

/// Install a global JSON subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    init_with_default("info")
}

/// Install a global JSON subscriber with a fallback filter directive.
pub fn init_with_default(
    default_directive: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
}
