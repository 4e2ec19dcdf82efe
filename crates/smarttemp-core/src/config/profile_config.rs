use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Per-category overrides applied when the profile store is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Category name → base temperature.
    pub base_temperatures: BTreeMap<String, f64>,
}

impl ProfileConfig {
    /// Overrides keyed by category. Unknown names are skipped.
    pub fn base_temperature_overrides(&self) -> BTreeMap<Category, f64> {
        self.base_temperatures
            .iter()
            .filter_map(|(name, temp)| name.parse::<Category>().ok().map(|c| (c, *temp)))
            .collect()
    }
}
