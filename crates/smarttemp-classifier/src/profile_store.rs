//! The fixed set of category profiles and their description embeddings.

use std::collections::BTreeMap;

use smarttemp_core::constants::{GENERIC_DESCRIPTION, GENERIC_RANGE};
use smarttemp_core::errors::{EncoderError, SmartTempResult};
use smarttemp_core::traits::IPromptEncoder;
use smarttemp_core::{Category, CategoryProfile};
use tracing::debug;

/// Category profiles, one per `Category`, in `Category::ALL` order.
///
/// Embeddings are computed once at construction and never again. The store
/// is read-only afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<CategoryProfile>,
}

impl ProfileStore {
    /// Encode every category description in one batch.
    ///
    /// Fails if the encoder fails or returns vectors of inconsistent length.
    pub fn build(
        encoder: &dyn IPromptEncoder,
        base_overrides: &BTreeMap<Category, f64>,
    ) -> SmartTempResult<Self> {
        let descriptions: Vec<String> = Category::ALL
            .iter()
            .map(|c| c.embedding_description().to_string())
            .collect();
        let embeddings = encoder.encode_batch(&descriptions)?;

        if embeddings.len() != Category::COUNT {
            return Err(EncoderError::InferenceFailed {
                reason: format!(
                    "expected {} description embeddings, got {}",
                    Category::COUNT,
                    embeddings.len()
                ),
            }
            .into());
        }
        let dims = encoder.dimensions();
        if let Some(bad) = embeddings.iter().find(|e| e.len() != dims) {
            return Err(EncoderError::DimensionMismatch {
                expected: dims,
                actual: bad.len(),
            }
            .into());
        }

        let profiles = Category::ALL
            .iter()
            .zip(embeddings)
            .map(|(c, emb)| profile(*c, emb, base_overrides))
            .collect();
        debug!(encoder = encoder.name(), dimensions = dims, "category profiles built");
        Ok(Self { profiles })
    }

    /// Profiles with no embeddings, for classifiers that never compare vectors.
    pub fn without_embeddings(base_overrides: &BTreeMap<Category, f64>) -> Self {
        Self {
            profiles: Category::ALL
                .iter()
                .map(|c| profile(*c, Vec::new(), base_overrides))
                .collect(),
        }
    }

    pub fn profiles(&self) -> &[CategoryProfile] {
        &self.profiles
    }

    pub fn get(&self, category: Category) -> Option<&CategoryProfile> {
        self.profiles.iter().find(|p| p.category() == category)
    }

    /// Base temperature for `category`, honoring overrides.
    pub fn base_temperature(&self, category: Category) -> f64 {
        self.get(category)
            .map(CategoryProfile::base_temperature)
            .unwrap_or_else(|| category.base_temperature())
    }

    /// Short human-readable summary. Unknown names get a generic text.
    pub fn describe(&self, name: &str) -> &'static str {
        name.parse::<Category>()
            .map(|c| c.summary())
            .unwrap_or(GENERIC_DESCRIPTION)
    }

    /// Informational temperature range. Unknown names get a generic range.
    pub fn range(&self, name: &str) -> (f64, f64) {
        name.parse::<Category>()
            .ok()
            .and_then(|c| self.get(c))
            .map(CategoryProfile::optimal_range)
            .unwrap_or(GENERIC_RANGE)
    }

    /// Base temperatures keyed by category.
    pub fn base_temperatures(&self) -> BTreeMap<Category, f64> {
        self.profiles
            .iter()
            .map(|p| (p.category(), p.base_temperature()))
            .collect()
    }
}

fn profile(
    category: Category,
    embedding: Vec<f32>,
    base_overrides: &BTreeMap<Category, f64>,
) -> CategoryProfile {
    let p = CategoryProfile::new(category, embedding);
    match base_overrides.get(&category) {
        Some(t) => p.with_base_temperature(*t),
        None => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarttemp_encoder::HashingEncoder;

    #[test]
    fn one_profile_per_category_in_fixed_order() {
        let store = ProfileStore::build(&HashingEncoder::new(64), &BTreeMap::new()).unwrap();
        let names: Vec<&str> = store.profiles().iter().map(|p| p.name()).collect();
        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, expected);
        assert!(store.profiles().iter().all(|p| p.description_embedding().len() == 64));
    }

    #[test]
    fn unknown_names_fall_back_to_generic() {
        let store = ProfileStore::without_embeddings(&BTreeMap::new());
        assert_eq!(store.describe("poetic"), "General purpose response");
        assert_eq!(store.range("poetic"), (0.3, 0.7));
        assert_eq!(store.range("creative"), (0.7, 1.0));
        assert_eq!(
            store.describe("factual"),
            "Precise, factual information with low temperature for accuracy"
        );
    }

    #[test]
    fn overrides_replace_base_temperature() {
        let overrides = BTreeMap::from([(Category::Creative, 0.95)]);
        let store = ProfileStore::without_embeddings(&overrides);
        assert_eq!(store.base_temperature(Category::Creative), 0.95);
        assert_eq!(store.base_temperature(Category::Factual), 0.1);
    }
}
