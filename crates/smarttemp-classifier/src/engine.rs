//! SmartTempEngine: the analysis facade.

use std::sync::Arc;

use smarttemp_core::config::{EngineConfig, ProfileConfig, SmartTempConfig};
use smarttemp_core::traits::{IPromptClassifier, IPromptEncoder};
use smarttemp_core::AnalysisResult;
use smarttemp_encoder::create_encoder;
use tracing::{info, warn};

use crate::classifiers::{EmbeddingClassifier, KeywordClassifier};
use crate::profile_store::ProfileStore;
use crate::temperature::create_strategy;

/// Owns the profile store and the selected classifier.
///
/// `analyze` never fails. Read-only after construction, so one engine can
/// serve concurrent callers.
pub struct SmartTempEngine {
    classifier: Box<dyn IPromptClassifier>,
    store: Arc<ProfileStore>,
}

impl SmartTempEngine {
    /// Build from a full config, creating the configured encoder.
    ///
    /// The embedding classifier needs a semantic encoder; when the factory
    /// can only offer the hashing encoder the keyword classifier is used.
    pub fn from_config(config: &SmartTempConfig) -> Self {
        match config.engine.classifier.as_str() {
            "keyword" => Self::keyword(&config.engine, &config.profiles),
            _ => {
                let encoder = create_encoder(&config.encoder);
                if !encoder.is_semantic() {
                    // Lexical vectors never clear the low-confidence tier
                    // against the category descriptions.
                    warn!(
                        encoder = encoder.name(),
                        "no semantic encoder available, using keyword classifier"
                    );
                    return Self::keyword(&config.engine, &config.profiles);
                }
                Self::with_encoder(&config.engine, &config.profiles, encoder)
            }
        }
    }

    /// Embedding engine over an injected encoder.
    ///
    /// If the category embeddings cannot be built the engine degrades to the
    /// keyword classifier rather than failing.
    pub fn with_encoder(
        engine: &EngineConfig,
        profiles: &ProfileConfig,
        encoder: Box<dyn IPromptEncoder>,
    ) -> Self {
        let overrides = profiles.base_temperature_overrides();
        match ProfileStore::build(encoder.as_ref(), &overrides) {
            Ok(store) => {
                let store = Arc::new(store);
                let strategy = create_strategy(engine, &store, "embedding");
                info!(
                    classifier = "embedding",
                    encoder = encoder.name(),
                    strategy = strategy.name(),
                    "engine ready"
                );
                let classifier = EmbeddingClassifier::new(
                    encoder,
                    Arc::clone(&store),
                    strategy,
                    engine.base_temperature,
                );
                Self {
                    classifier: Box::new(classifier),
                    store,
                }
            }
            Err(e) => {
                warn!(
                    encoder = encoder.name(),
                    error = %e,
                    "category embeddings unavailable, degrading to keyword classifier"
                );
                Self::keyword(engine, profiles)
            }
        }
    }

    /// Rule-based engine. No encoder involved.
    pub fn keyword(engine: &EngineConfig, profiles: &ProfileConfig) -> Self {
        let store = Arc::new(ProfileStore::without_embeddings(
            &profiles.base_temperature_overrides(),
        ));
        let strategy = create_strategy(engine, &store, "keyword");
        info!(classifier = "keyword", strategy = strategy.name(), "engine ready");
        Self {
            classifier: Box::new(KeywordClassifier::new(strategy, engine.base_temperature)),
            store,
        }
    }

    /// Wrap an already-built classifier.
    pub fn from_parts(classifier: Box<dyn IPromptClassifier>, store: Arc<ProfileStore>) -> Self {
        Self { classifier, store }
    }

    pub fn analyze(&self, prompt: &str) -> AnalysisResult {
        self.classifier.analyze(prompt)
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.store
    }

    pub fn describe(&self, category: &str) -> &'static str {
        self.store.describe(category)
    }

    pub fn range(&self, category: &str) -> (f64, f64) {
        self.store.range(category)
    }
}
