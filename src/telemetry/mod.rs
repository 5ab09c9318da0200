//! Telemetry module
//!
//! Structured logging

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize logging from configuration
///
/// `verbose` forces debug level regardless of the configured level.
pub fn init_telemetry(config: &TelemetryConfig, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    init_logging(level, config.log_format)
}
