use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::torque::error::TorqueError;

/// Initialize tracing for the host process from the SDK logging config.
///
/// The SDK never installs a subscriber on its own; hosts call this once at
/// startup (or wire the SDK's `tracing` events into their own subscriber).
pub fn init_logging(logging_config: &LoggingConfig) -> Result<(), TorqueError> {
    // Parse level string -> LevelFilter
    let level_filter = match logging_config.level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        other => {
            return Err(TorqueError::InvalidConfig(format!(
                "Invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
                other
            )));
        }
    };

    // This can be used to allow env-based overrides, plus the default:
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    let registry = tracing_subscriber::registry().with(filter_layer);
    let result = match logging_config.format.to_lowercase().as_str() {
        "json" => registry.with(fmt::layer().json()).try_init(),
        // Human-readable console output, also the fallback for unknown formats
        _ => registry.with(fmt::layer().pretty()).try_init(),
    };
    result.map_err(|e| TorqueError::Unknown(format!("failed to install subscriber: {}", e)))
}
