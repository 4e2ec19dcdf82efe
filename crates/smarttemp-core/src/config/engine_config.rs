use serde::{Deserialize, Serialize};

use super::defaults;

/// Classifier and temperature policy selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Classifier: "embedding" or "keyword".
    pub classifier: String,
    /// Temperature for empty prompts and, in linear mode, the base knob.
    pub base_temperature: f64,
    /// Linear mode slope: `base + (1 - confidence) * scale_factor`.
    pub scale_factor: f64,
    /// "tiered" or "linear". Unset picks the classifier's natural pairing.
    pub temperature_strategy: Option<String>,
    /// Linear mode uses the detected category's base temperature instead of
    /// `base_temperature` when the category is known.
    pub linear_uses_category_base: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier: defaults::DEFAULT_CLASSIFIER.to_string(),
            base_temperature: defaults::DEFAULT_BASE_TEMPERATURE,
            scale_factor: defaults::DEFAULT_SCALE_FACTOR,
            temperature_strategy: None,
            linear_uses_category_base: defaults::DEFAULT_LINEAR_USES_CATEGORY_BASE,
        }
    }
}

impl EngineConfig {
    /// Strategy actually used: explicit setting, else tiered for the
    /// embedding classifier and linear for the keyword classifier.
    pub fn effective_strategy(&self) -> &str {
        self.strategy_for(&self.classifier)
    }

    /// Strategy for an engine that ended up running `classifier`, which can
    /// differ from the configured one after a degradation.
    pub fn strategy_for(&self, classifier: &str) -> &str {
        match self.temperature_strategy.as_deref() {
            Some(s) => s,
            None if classifier == "keyword" => "linear",
            None => "tiered",
        }
    }
}
