//! Embedding-similarity classifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use smarttemp_core::errors::{EncoderError, SmartTempResult};
use smarttemp_core::models::Classification;
use smarttemp_core::traits::{IPromptClassifier, IPromptEncoder, ITemperatureStrategy};
use smarttemp_core::AnalysisResult;
use tracing::{debug, error};

use super::argmax;
use crate::profile_store::ProfileStore;
use crate::similarity::cosine_similarity;

/// Encodes the prompt once and picks the category whose description
/// embedding is most similar.
///
/// Confidence is the raw winning cosine score. It is not renormalized
/// against the other scores; the tier thresholds assume that.
pub struct EmbeddingClassifier {
    encoder: Box<dyn IPromptEncoder>,
    store: Arc<ProfileStore>,
    strategy: Box<dyn ITemperatureStrategy>,
    base_temperature: f64,
}

impl EmbeddingClassifier {
    pub fn new(
        encoder: Box<dyn IPromptEncoder>,
        store: Arc<ProfileStore>,
        strategy: Box<dyn ITemperatureStrategy>,
        base_temperature: f64,
    ) -> Self {
        Self {
            encoder,
            store,
            strategy,
            base_temperature,
        }
    }

    /// Category and scores for a non-empty prompt, without a temperature.
    pub fn classify(&self, prompt: &str) -> SmartTempResult<Classification> {
        let embedding = self.encoder.encode(prompt)?;

        let mut similarities = BTreeMap::new();
        for profile in self.store.profiles() {
            let reference = profile.description_embedding();
            if reference.len() != embedding.len() {
                return Err(EncoderError::DimensionMismatch {
                    expected: reference.len(),
                    actual: embedding.len(),
                }
                .into());
            }
            similarities.insert(profile.category(), cosine_similarity(&embedding, reference));
        }

        let (category, confidence) =
            argmax(&similarities).ok_or(EncoderError::EmptyEmbedding)?;
        Ok(Classification {
            category,
            confidence,
            similarities,
        })
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl IPromptClassifier for EmbeddingClassifier {
    fn analyze(&self, prompt: &str) -> AnalysisResult {
        if prompt.trim().is_empty() {
            return AnalysisResult::default_for(prompt, self.base_temperature);
        }

        match self.classify(prompt) {
            Ok(classification) => {
                let temperature = self
                    .strategy
                    .temperature(classification.category, classification.confidence);
                debug!(
                    category = %classification.category,
                    confidence = classification.confidence,
                    temperature,
                    "prompt classified"
                );
                AnalysisResult::from_classification(prompt, classification, temperature)
            }
            Err(e) => {
                error!(encoder = self.encoder.name(), error = %e, "prompt analysis failed, using default category");
                AnalysisResult::default_for(prompt, self.base_temperature).with_error(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "embedding"
    }
}
