//! Three-tier confidence policy.
//!
//! - confidence > 0.7: the category's base temperature.
//! - 0.4 < confidence <= 0.7: blend from the base toward 0.8 as confidence drops.
//! - confidence <= 0.4: 0.8 regardless of category.
//!
//! The tiers meet at both boundaries: 0.7 gives the base, 0.4 gives 0.8.

use std::collections::BTreeMap;

use smarttemp_core::constants::{
    clamp_temperature, EXPLORATORY_TEMPERATURE, HIGH_CONFIDENCE_THRESHOLD,
    MEDIUM_CONFIDENCE_THRESHOLD,
};
use smarttemp_core::traits::ITemperatureStrategy;
use smarttemp_core::Category;

use crate::profile_store::ProfileStore;

#[derive(Debug, Clone)]
pub struct TieredTemperature {
    bases: BTreeMap<Category, f64>,
}

impl Default for TieredTemperature {
    fn default() -> Self {
        Self {
            bases: Category::ALL
                .iter()
                .map(|c| (*c, c.base_temperature()))
                .collect(),
        }
    }
}

impl TieredTemperature {
    /// Canonical base temperatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base temperatures taken from the store, overrides included.
    pub fn from_store(store: &ProfileStore) -> Self {
        Self {
            bases: store.base_temperatures(),
        }
    }

    fn base(&self, category: Category) -> f64 {
        self.bases
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.base_temperature())
    }
}

impl ITemperatureStrategy for TieredTemperature {
    fn temperature(&self, category: Category, confidence: f64) -> f64 {
        let base = self.base(category);
        let raw = if confidence > HIGH_CONFIDENCE_THRESHOLD {
            base
        } else if confidence > MEDIUM_CONFIDENCE_THRESHOLD {
            let blend = (HIGH_CONFIDENCE_THRESHOLD - confidence)
                / (HIGH_CONFIDENCE_THRESHOLD - MEDIUM_CONFIDENCE_THRESHOLD);
            base + (EXPLORATORY_TEMPERATURE - base) * blend
        } else {
            // Also catches NaN.
            EXPLORATORY_TEMPERATURE
        };
        clamp_temperature(raw)
    }

    fn name(&self) -> &str {
        "tiered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn high_confidence_returns_base_exactly() {
        let t = TieredTemperature::new();
        for c in Category::ALL {
            assert_eq!(t.temperature(c, 0.95), c.base_temperature());
            assert_eq!(t.temperature(c, 1.0), c.base_temperature());
        }
    }

    #[test]
    fn low_confidence_is_exploratory() {
        let t = TieredTemperature::new();
        for c in Category::ALL {
            assert_eq!(t.temperature(c, 0.4), 0.8);
            assert_eq!(t.temperature(c, 0.1), 0.8);
            assert_eq!(t.temperature(c, -0.3), 0.8);
            assert_eq!(t.temperature(c, f64::NAN), 0.8);
        }
    }

    #[test]
    fn medium_tier_blends_linearly() {
        let t = TieredTemperature::new();
        // factual base 0.1, halfway blend → 0.45
        assert!((t.temperature(Category::Factual, 0.55) - 0.45).abs() < EPS);
        // creative base 0.9 blends downward toward 0.8
        assert!((t.temperature(Category::Creative, 0.55) - 0.85).abs() < EPS);
    }

    #[test]
    fn boundaries_are_continuous() {
        let t = TieredTemperature::new();
        for c in Category::ALL {
            let at_high = t.temperature(c, 0.7);
            assert!((at_high - c.base_temperature()).abs() < EPS, "{c} at 0.7");
            let just_above_low = t.temperature(c, 0.4 + 1e-12);
            assert!((just_above_low - 0.8).abs() < 1e-6, "{c} just above 0.4");
        }
    }

    #[test]
    fn out_of_range_override_is_clamped() {
        let t = TieredTemperature {
            bases: BTreeMap::from([(Category::Creative, 1.6)]),
        };
        assert_eq!(t.temperature(Category::Creative, 0.9), 1.0);
    }
}
