//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "SMARTTEMP_LOG";

/// Initialize logging with defaults.
///
/// Reads `SMARTTEMP_LOG` for per-crate levels, e.g.
/// `SMARTTEMP_LOG=smarttemp_classifier=debug,smarttemp_generation=warn`.
/// Falls back to `smarttemp=info` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize logging from config. `SMARTTEMP_LOG` still wins when set.
///
/// Output goes to stderr so stdout stays clean for command results.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

        // try_init: a host application may already own the global subscriber.
        let result = if config.json {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        };

        if result.is_ok() {
            tracing::debug!(level = %config.log_level, json = config.json, "tracing initialized");
        }
    });
}

/// Filter directive covering every `smarttemp*` target at `level`.
pub fn default_directive(level: &str) -> String {
    let level = match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => l.to_string(),
        _ => "info".to_string(),
    };
    format!("smarttemp={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_normalizes_level() {
        assert_eq!(default_directive("DEBUG"), "smarttemp=debug");
        assert_eq!(default_directive("nonsense"), "smarttemp=info");
    }
}
