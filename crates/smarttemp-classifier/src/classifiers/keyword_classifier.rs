//! Keyword-pattern classifier.

use std::collections::BTreeMap;

use smarttemp_core::constants::{DEFAULT_CONFIDENCE, KEYWORD_HIT_WEIGHT};
use smarttemp_core::models::Classification;
use smarttemp_core::traits::{IPromptClassifier, ITemperatureStrategy};
use smarttemp_core::{AnalysisResult, Category};
use tracing::debug;

use super::argmax_in;

/// Tie-break order for equal keyword scores.
pub const KEYWORD_ORDER: [Category; Category::COUNT] = [
    Category::Factual,
    Category::Creative,
    Category::Instructional,
    Category::Analytical,
    Category::Personal,
    Category::Philosophical,
];

/// Counts lowercase keyword substrings per category.
///
/// Score = min(1.0, hits * 0.3). With no hits anywhere the result is the
/// default category at confidence 0.5. Ties go to the category listed
/// first in `KEYWORD_ORDER`. Needs no encoder.
pub struct KeywordClassifier {
    strategy: Box<dyn ITemperatureStrategy>,
    base_temperature: f64,
}

impl KeywordClassifier {
    pub fn new(strategy: Box<dyn ITemperatureStrategy>, base_temperature: f64) -> Self {
        Self {
            strategy,
            base_temperature,
        }
    }

    pub fn classify(&self, prompt: &str) -> Classification {
        let lower = prompt.to_lowercase();
        let scores: BTreeMap<Category, f64> = Category::ALL
            .iter()
            .map(|c| {
                let hits = c.keywords().iter().filter(|k| lower.contains(*k)).count();
                (*c, (hits as f64 * KEYWORD_HIT_WEIGHT).min(1.0))
            })
            .collect();

        match argmax_in(&scores, KEYWORD_ORDER) {
            Some((category, confidence)) if confidence > 0.0 => Classification {
                category,
                confidence,
                similarities: scores,
            },
            _ => Classification {
                category: Category::DEFAULT,
                confidence: DEFAULT_CONFIDENCE,
                similarities: scores,
            },
        }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl IPromptClassifier for KeywordClassifier {
    fn analyze(&self, prompt: &str) -> AnalysisResult {
        if prompt.trim().is_empty() {
            return AnalysisResult::default_for(prompt, self.base_temperature);
        }
        let classification = self.classify(prompt);
        let temperature = self
            .strategy
            .temperature(classification.category, classification.confidence);
        debug!(
            category = %classification.category,
            confidence = classification.confidence,
            temperature,
            "prompt matched keywords"
        );
        AnalysisResult::from_classification(prompt, classification, temperature)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
