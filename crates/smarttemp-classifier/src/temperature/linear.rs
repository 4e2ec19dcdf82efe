use std::collections::BTreeMap;

use smarttemp_core::constants::clamp_temperature;
use smarttemp_core::traits::ITemperatureStrategy;
use smarttemp_core::Category;

/// `base + (1 - confidence) * scale_factor`, clamped.
///
/// `base` is the configured knob, or the category's own base temperature
/// when category bases are attached.
#[derive(Debug, Clone)]
pub struct LinearTemperature {
    base_temperature: f64,
    scale_factor: f64,
    category_bases: Option<BTreeMap<Category, f64>>,
}

impl LinearTemperature {
    /// Both knobs are clamped to [0.1, 1.0].
    pub fn new(base_temperature: f64, scale_factor: f64) -> Self {
        Self {
            base_temperature: clamp_temperature(base_temperature),
            scale_factor: clamp_temperature(scale_factor),
            category_bases: None,
        }
    }

    pub fn with_category_bases(mut self, bases: BTreeMap<Category, f64>) -> Self {
        self.category_bases = Some(bases);
        self
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn base(&self, category: Category) -> f64 {
        self.category_bases
            .as_ref()
            .and_then(|m| m.get(&category).copied())
            .unwrap_or(self.base_temperature)
    }
}

impl ITemperatureStrategy for LinearTemperature {
    fn temperature(&self, category: Category, confidence: f64) -> f64 {
        clamp_temperature(self.base(category) + (1.0 - confidence) * self.scale_factor)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_with_configured_base() {
        let t = LinearTemperature::new(0.7, 0.3);
        assert!((t.temperature(Category::Factual, 0.5) - 0.85).abs() < 1e-9);
        assert!((t.temperature(Category::Creative, 1.0) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn knobs_are_clamped() {
        let t = LinearTemperature::new(3.0, 0.0);
        assert_eq!(t.base_temperature(), 1.0);
        assert_eq!(t.scale_factor(), 0.1);
    }

    #[test]
    fn category_bases_take_precedence() {
        let bases = Category::ALL.iter().map(|c| (*c, c.base_temperature())).collect();
        let t = LinearTemperature::new(0.7, 0.3).with_category_bases(bases);
        assert!((t.temperature(Category::Factual, 0.9) - 0.13).abs() < 1e-9);
        // 0.9 + 0.4 * 0.3 overshoots and clamps.
        assert_eq!(t.temperature(Category::Creative, 0.6), 1.0);
    }
}
