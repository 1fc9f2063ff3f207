//! Tracing bootstrap for shells embedding the board.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application. [`init_tracing`] is a convenience for shells
//! that want the standard formatted output on stderr.

use std::io::IsTerminal;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Neither `RUST_LOG` nor the fallback level is a valid filter.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
}

/// Installs a formatted subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` when the variable is unset or invalid.
///
/// Calling this again once a global subscriber is set is not an error.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_level` is not a
/// valid filter directive and `RUST_LOG` provides none.
pub fn init_tracing(default_level: &str) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
