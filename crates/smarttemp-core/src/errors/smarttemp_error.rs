use super::{ConfigError, EncoderError, GenerationError};

/// Result alias used across the workspace.
pub type SmartTempResult<T> = Result<T, SmartTempError>;

/// Top-level error for every fallible SmartTemp operation.
#[derive(Debug, thiserror::Error)]
pub enum SmartTempError {
    #[error("encoder error: {0}")]
    EncoderError(#[from] EncoderError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },
}
