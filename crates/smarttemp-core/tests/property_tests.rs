//! Property tests for temperature bounds and result invariants.

use proptest::prelude::*;

use smarttemp_core::constants::{clamp_temperature, MAX_TEMPERATURE, MIN_TEMPERATURE};
use smarttemp_core::{AnalysisResult, Category};

proptest! {
    #[test]
    fn clamped_temperature_is_always_in_bounds(t in proptest::num::f64::ANY) {
        let c = clamp_temperature(t);
        prop_assert!((MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&c));
    }

    #[test]
    fn in_range_temperatures_pass_through(t in 0.1f64..=1.0) {
        prop_assert_eq!(clamp_temperature(t), t);
    }

    #[test]
    fn default_results_stay_in_bounds(prompt in ".{0,40}", base in -5.0f64..5.0) {
        let r = AnalysisResult::default_for(prompt.clone(), base);
        prop_assert_eq!(r.prompt, prompt);
        prop_assert_eq!(r.category, Category::Analytical);
        prop_assert!((MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&r.temperature));
    }

    #[test]
    fn category_names_parse_back(idx in 0usize..Category::COUNT) {
        let c = Category::ALL[idx];
        prop_assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
    }
}
