//! Temperature strategies: (category, confidence) → temperature in [0.1, 1.0].

pub mod linear;
pub mod tiered;

pub use linear::LinearTemperature;
pub use tiered::TieredTemperature;

use smarttemp_core::config::EngineConfig;
use smarttemp_core::traits::ITemperatureStrategy;

use crate::profile_store::ProfileStore;

/// Build the strategy `config` pairs with `classifier`.
///
/// Both strategies read per-category base temperatures from `store`, so
/// profile overrides apply to either.
pub fn create_strategy(
    config: &EngineConfig,
    store: &ProfileStore,
    classifier: &str,
) -> Box<dyn ITemperatureStrategy> {
    match config.strategy_for(classifier) {
        "linear" => {
            let mut linear = LinearTemperature::new(config.base_temperature, config.scale_factor);
            if config.linear_uses_category_base {
                linear = linear.with_category_bases(store.base_temperatures());
            }
            Box::new(linear)
        }
        _ => Box::new(TieredTemperature::from_store(store)),
    }
}
