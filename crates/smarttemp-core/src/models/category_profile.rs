use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One category with its precomputed description embedding.
///
/// Built once when the profile store is constructed. Fields are read-only
/// afterwards, so a store can be shared between callers without locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    category: Category,
    description: String,
    description_embedding: Vec<f32>,
    base_temperature: f64,
    optimal_range: (f64, f64),
}

impl CategoryProfile {
    /// Profile with the category's canonical description, temperature, and range.
    pub fn new(category: Category, description_embedding: Vec<f32>) -> Self {
        Self {
            category,
            description: category.embedding_description().to_string(),
            description_embedding,
            base_temperature: category.base_temperature(),
            optimal_range: category.optimal_range(),
        }
    }

    /// Override the base temperature. Values outside [0.1, 1.0] are kept as-is;
    /// the temperature controller clamps its output.
    pub fn with_base_temperature(mut self, base_temperature: f64) -> Self {
        self.base_temperature = base_temperature;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &'static str {
        self.category.as_str()
    }

    /// Text the embedding was derived from.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_embedding(&self) -> &[f32] {
        &self.description_embedding
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn optimal_range(&self) -> (f64, f64) {
        self.optimal_range
    }
}
