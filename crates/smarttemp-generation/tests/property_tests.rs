use proptest::prelude::*;
use smarttemp_generation::{FallbackGenerator, GenerationClient, TemperatureBand};
use test_fixtures::ScriptedBackend;

proptest! {
    #[test]
    fn fallback_always_shows_formatted_temperature(prompt in ".{0,60}", t in 0.1f64..=1.0) {
        let text = FallbackGenerator::default().generate(&prompt, t);
        let formatted = format!("{t:.2}");
        prop_assert!(text.contains(&formatted));
        prop_assert!(text.starts_with(TemperatureBand::for_temperature(t).marker()));
    }

    #[test]
    fn generate_never_fails_and_is_non_empty(prompt in ".{0,60}", t in 0.1f64..=1.0, max in 1u32..4096) {
        let client = GenerationClient::new(
            Box::new(ScriptedBackend::new(vec![])),
            FallbackGenerator::default(),
            500,
        );
        let outcome = client.generate(&prompt, t, Some(max));
        prop_assert!(outcome.is_fallback());
        prop_assert!(!outcome.text.is_empty());
    }
}
