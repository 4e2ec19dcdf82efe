use crate::category::Category;

/// Converts a classification into a sampling temperature.
pub trait ITemperatureStrategy: Send + Sync {
    /// Temperature for `category` at `confidence`, always within [0.1, 1.0].
    fn temperature(&self, category: Category, confidence: f64) -> f64;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}
