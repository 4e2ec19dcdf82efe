//! Deterministic offline generator used whenever no backend answers.

use std::time::Duration;

use smarttemp_core::constants::{ANALYTICAL_BAND_UPPER, FACTUAL_BAND_UPPER};

/// Output framing chosen from the temperature alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// `t < 0.3`
    Factual,
    /// `0.3 <= t < 0.6`
    Analytical,
    /// `t >= 0.6`
    Creative,
}

impl TemperatureBand {
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature < FACTUAL_BAND_UPPER {
            Self::Factual
        } else if temperature < ANALYTICAL_BAND_UPPER {
            Self::Analytical
        } else {
            Self::Creative
        }
    }

    /// Heading that opens every fallback text in this band.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Factual => "**Factual Response**",
            Self::Analytical => "**Analytical Response**",
            Self::Creative => "**Creative Response**",
        }
    }
}

/// Template text keyed by temperature band.
///
/// Output depends only on (prompt, temperature). The temperature is always
/// printed with two decimals, so fallback text is recognizable by shape.
#[derive(Debug, Clone, Default)]
pub struct FallbackGenerator {
    simulate_latency: bool,
}

impl FallbackGenerator {
    pub fn new(simulate_latency: bool) -> Self {
        Self { simulate_latency }
    }

    /// Simulated processing time; hotter temperatures "think" longer.
    pub fn latency(temperature: f64) -> Duration {
        if temperature < 0.4 {
            Duration::from_millis(1500)
        } else if temperature < 0.7 {
            Duration::from_millis(2000)
        } else {
            Duration::from_millis(2500)
        }
    }

    pub fn generate(&self, prompt: &str, temperature: f64) -> String {
        if self.simulate_latency {
            std::thread::sleep(Self::latency(temperature));
        }
        let band = TemperatureBand::for_temperature(temperature);
        let header = format!("{} (Temperature: {temperature:.2})", band.marker());
        let body = match band {
            TemperatureBand::Factual => format!(
                "Key facts for \"{prompt}\":\n\n\
                 - Primary information: the specific data the question asks for\n\
                 - Supporting context: background needed to read it correctly\n\
                 - Related facts: connected details worth checking\n\n\
                 Generated offline at a low temperature ({temperature:.2}) for precise, \
                 structured output."
            ),
            TemperatureBand::Analytical => format!(
                "An analysis of \"{prompt}\":\n\n\
                 **Perspectives**\n\
                 - The technical view and its practical implications\n\
                 - The broader context and how it developed\n\
                 - Likely future directions\n\n\
                 **Assessment**\n\
                 Several factors pull in different directions; weighing them points to a \
                 balanced approach.\n\n\
                 Generated offline at a medium temperature ({temperature:.2}) for balanced \
                 reasoning."
            ),
            TemperatureBand::Creative => format!(
                "\"{prompt}\" opens a wide space to wander through.\n\n\
                 Picture the idea from an unexpected angle: as an old story retold, or as a \
                 sketch of a future nobody has built yet. Each thread leads somewhere new, and \
                 the familiar starts to look strange.\n\n\
                 Generated offline at a high temperature ({temperature:.2}) for varied, \
                 exploratory output."
            ),
        };
        format!("{header}\n\n{body}")
    }
}
