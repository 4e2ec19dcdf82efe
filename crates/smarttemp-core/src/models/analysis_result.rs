use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::{clamp_temperature, DEFAULT_CONFIDENCE};

/// Output of the classification step alone, before a temperature is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    /// Winning score, unmodified. Not a probability.
    pub confidence: f64,
    /// Score for every known category; empty when the input was empty.
    pub similarities: BTreeMap<Category, f64>,
}

impl Classification {
    /// The default-category classification used for empty input.
    pub fn default_category() -> Self {
        Self {
            category: Category::DEFAULT,
            confidence: DEFAULT_CONFIDENCE,
            similarities: BTreeMap::new(),
        }
    }
}

/// Result of analyzing one prompt. Built fresh per call and never mutated
/// by the engine afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prompt: String,
    pub category: Category,
    /// Raw winning similarity. Not clamped.
    pub confidence: f64,
    /// Always within [0.1, 1.0].
    pub temperature: f64,
    pub all_similarities: BTreeMap<Category, f64>,
    /// Set when the classifier recovered from an internal failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Combine a classification with the temperature derived from it.
    pub fn from_classification(
        prompt: impl Into<String>,
        classification: Classification,
        temperature: f64,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            category: classification.category,
            confidence: classification.confidence,
            temperature: clamp_temperature(temperature),
            all_similarities: classification.similarities,
            error: None,
        }
    }

    /// Default-category result: `analytical`, confidence 0.5, no similarities,
    /// and the configured base temperature.
    pub fn default_for(prompt: impl Into<String>, base_temperature: f64) -> Self {
        Self::from_classification(prompt, Classification::default_category(), base_temperature)
    }

    /// Attach an error marker.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Whether the classifier fell back to the default result after a failure.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// The `n` best-scoring categories, highest first.
    pub fn top_k(&self, n: usize) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> =
            self.all_similarities.iter().map(|(c, s)| (*c, *s)).collect();
        // Stable sort keeps category order among equal scores.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_result_shape() {
        let r = AnalysisResult::default_for("", 0.7);
        assert_eq!(r.category, Category::Analytical);
        assert_eq!(r.confidence, 0.5);
        assert_eq!(r.temperature, 0.7);
        assert!(r.all_similarities.is_empty());
        assert!(!r.is_degraded());
    }

    #[test]
    fn temperature_is_clamped_on_construction() {
        let r = AnalysisResult::default_for("x", 4.0);
        assert_eq!(r.temperature, 1.0);
    }

    #[test]
    fn top_k_orders_by_score() {
        let mut sims = BTreeMap::new();
        sims.insert(Category::Factual, 0.2);
        sims.insert(Category::Creative, 0.9);
        sims.insert(Category::Personal, 0.5);
        let r = AnalysisResult::from_classification(
            "p",
            Classification {
                category: Category::Creative,
                confidence: 0.9,
                similarities: sims,
            },
            0.9,
        );
        let top = r.top_k(2);
        assert_eq!(top, vec![(Category::Creative, 0.9), (Category::Personal, 0.5)]);
    }

    #[test]
    fn error_marker_serializes_only_when_present() {
        let clean = serde_json::to_value(AnalysisResult::default_for("a", 0.7)).unwrap();
        assert!(clean.get("error").is_none());

        let marked = AnalysisResult::default_for("a", 0.7).with_error("encoder down");
        let json = serde_json::to_value(&marked).unwrap();
        assert_eq!(json["error"], "encoder down");
        assert_eq!(json["category"], "analytical");
    }
}
