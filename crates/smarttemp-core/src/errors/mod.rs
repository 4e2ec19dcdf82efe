//! Error handling for SmartTemp.
//! One error enum per subsystem, `thiserror` only, rolled up into `SmartTempError`.

pub mod config_error;
pub mod encoder_error;
pub mod generation_error;
pub mod smarttemp_error;

pub use config_error::ConfigError;
pub use encoder_error::EncoderError;
pub use generation_error::GenerationError;
pub use smarttemp_error::{SmartTempError, SmartTempResult};
