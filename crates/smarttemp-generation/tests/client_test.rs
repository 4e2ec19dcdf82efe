//! GenerationClient contract over scripted backends.

use smarttemp_core::errors::GenerationError;
use smarttemp_core::models::GenerationSource;
use smarttemp_generation::{FallbackGenerator, GenerationClient};
use test_fixtures::ScriptedBackend;

fn client(script: Vec<Result<String, GenerationError>>) -> GenerationClient {
    GenerationClient::new(
        Box::new(ScriptedBackend::new(script)),
        FallbackGenerator::default(),
        500,
    )
}

#[test]
fn live_text_is_tagged_with_backend_name() {
    let outcome = client(vec![Ok("live".into())]).generate("p", 0.3, None);
    assert_eq!(outcome.text, "live");
    assert_eq!(outcome.temperature, 0.3);
    assert_eq!(
        outcome.source,
        GenerationSource::Backend {
            name: "scripted".into()
        }
    );
}

#[test]
fn failure_reason_is_recorded_on_fallback() {
    let outcome = client(vec![Err(GenerationError::MalformedResponse {
        reason: "bad".into(),
    })])
    .generate("p", 0.7, None);
    match outcome.source {
        GenerationSource::Fallback { reason } => assert!(reason.contains("bad")),
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(outcome.text.contains("**Creative Response** (Temperature: 0.70)"));
}

#[test]
fn temperature_is_passed_through_unchanged() {
    // Out-of-range values are the caller's business; the client does not clamp.
    let outcome = client(vec![]).generate("p", 1.7, None);
    assert_eq!(outcome.temperature, 1.7);
    assert!(outcome.text.contains("1.70"));
}

#[test]
fn set_model_reaches_backend() {
    let mut c = client(vec![]);
    assert_eq!(c.model(), "scripted");
    c.set_model("mistral");
    assert_eq!(c.model(), "mistral");
    assert_eq!(c.model_info()["name"], "mistral");
}
