use serde::{Deserialize, Serialize};

use super::defaults;

/// Offline fallback generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Sleep before returning fallback text, longer for hotter temperatures.
    pub simulate_latency: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            simulate_latency: defaults::DEFAULT_SIMULATE_LATENCY,
        }
    }
}
