/// Prompt encoder errors.
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("encoder returned an empty vector")]
    EmptyEmbedding,
}
