use crate::models::AnalysisResult;

/// Prompt classification strategy.
///
/// `analyze` is total: empty input and internal failures both yield the
/// default-category result instead of an error.
pub trait IPromptClassifier: Send + Sync {
    /// Classify `prompt` and attach the temperature derived from it.
    fn analyze(&self, prompt: &str) -> AnalysisResult;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}
