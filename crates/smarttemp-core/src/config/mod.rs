//! Configuration system for SmartTemp.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod backend_config;
pub mod defaults;
pub mod encoder_config;
pub mod engine_config;
pub mod fallback_config;
pub mod observability_config;
pub mod profile_config;
pub mod smarttemp_config;

pub use backend_config::BackendConfig;
pub use encoder_config::EncoderConfig;
pub use engine_config::EngineConfig;
pub use fallback_config::FallbackConfig;
pub use observability_config::ObservabilityConfig;
pub use profile_config::ProfileConfig;
pub use smarttemp_config::{CliOverrides, SmartTempConfig};
