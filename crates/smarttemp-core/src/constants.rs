// Policy constants. The tier thresholds are calibrated against the raw
// winning cosine similarity; do not renormalize confidence without
// recalibrating them.

/// Lower bound of every temperature the engine emits.
pub const MIN_TEMPERATURE: f64 = 0.1;
/// Upper bound of every temperature the engine emits.
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Confidence strictly above this uses the category base temperature.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Confidence strictly above this (and up to the high threshold) is blended.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;
/// Temperature the blend moves toward, and the low-confidence output.
pub const EXPLORATORY_TEMPERATURE: f64 = 0.8;

/// Category returned for empty prompts and classifier failures.
pub const DEFAULT_CATEGORY_NAME: &str = "analytical";
/// Confidence reported alongside the default category.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Per-keyword score in the rule-based classifier.
pub const KEYWORD_HIT_WEIGHT: f64 = 0.3;

/// Description returned by the profile store for unknown category names.
pub const GENERIC_DESCRIPTION: &str = "General purpose response";
/// Range returned by the profile store for unknown category names.
pub const GENERIC_RANGE: (f64, f64) = (0.3, 0.7);

/// Models reported when the backend cannot list its own.
pub const FALLBACK_MODELS: [&str; 3] = ["llama2", "mistral", "codellama"];
/// Returned when a successful generate response carries no text field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

/// Fallback generator band edges.
pub const FACTUAL_BAND_UPPER: f64 = 0.3;
pub const ANALYTICAL_BAND_UPPER: f64 = 0.6;

/// Clamp a temperature into `[MIN_TEMPERATURE, MAX_TEMPERATURE]`.
///
/// NaN maps to the lower bound so the output range holds for every input.
pub fn clamp_temperature(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_TEMPERATURE;
    }
    value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_temperature(-3.0), MIN_TEMPERATURE);
        assert_eq!(clamp_temperature(1.7), MAX_TEMPERATURE);
        assert_eq!(clamp_temperature(0.55), 0.55);
        assert_eq!(clamp_temperature(f64::NAN), MIN_TEMPERATURE);
    }
}
