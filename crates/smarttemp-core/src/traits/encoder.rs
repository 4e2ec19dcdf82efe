use crate::errors::SmartTempResult;

/// Maps text to a fixed-length vector.
///
/// The dimensionality is whatever the implementation produces, as long as
/// it stays the same across calls on one instance.
pub trait IPromptEncoder: Send + Sync {
    /// Encode a single text.
    fn encode(&self, text: &str) -> SmartTempResult<Vec<f32>>;

    /// Encode a batch of texts.
    fn encode_batch(&self, texts: &[String]) -> SmartTempResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }

    /// The dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Human-readable encoder name.
    fn name(&self) -> &str;

    /// Whether this encoder is currently usable.
    fn is_available(&self) -> bool {
        true
    }

    /// Whether similar meanings map to nearby vectors. Lexical encoders
    /// only match shared words and return `false`.
    fn is_semantic(&self) -> bool {
        true
    }
}
