//! Ollama backend and client behavior against a mock server.

use std::net::TcpListener;

use mockito::{Matcher, Server};
use serde_json::json;
use smarttemp_core::config::{BackendConfig, SmartTempConfig};
use smarttemp_core::errors::GenerationError;
use smarttemp_core::models::GenerationSource;
use smarttemp_core::traits::IGenerationBackend;
use smarttemp_core::GenerationRequest;
use smarttemp_generation::{GenerationClient, OllamaBackend};

fn config(url: &str) -> SmartTempConfig {
    let mut config = SmartTempConfig::default();
    config.backend = BackendConfig {
        base_url: url.to_string(),
        connect_timeout_secs: 2,
        generate_timeout_secs: 2,
        metadata_timeout_secs: 2,
        health_timeout_secs: 2,
        ..Default::default()
    };
    config
}

#[test]
fn generate_sends_expected_payload() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(json!({
            "model": "llama2",
            "prompt": "Name a prime",
            "stream": false,
            "options": {
                "temperature": 0.2,
                "num_predict": 64,
                "top_p": 0.9,
                "top_k": 40,
                "repeat_penalty": 1.1
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"model":"llama2","response":"7","done":true}"#)
        .create();

    let client = GenerationClient::from_config(&config(&server.url()));
    let outcome = client.generate("Name a prime", 0.2, Some(64));
    assert_eq!(outcome.text, "7");
    assert!(!outcome.is_fallback());
    mock.assert();
}

#[test]
fn missing_response_field_yields_placeholder() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"done":true}"#)
        .create();

    let client = GenerationClient::from_config(&config(&server.url()));
    let outcome = client.generate("hi", 0.5, None);
    assert_eq!(outcome.text, "No response generated");
    assert!(!outcome.is_fallback());
}

#[test]
fn server_error_falls_back() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body("boom")
        .create();

    let client = GenerationClient::from_config(&config(&server.url()));
    let outcome = client.generate("Explain tides", 0.5, None);
    assert!(outcome.is_fallback());
    assert!(outcome.text.contains("**Analytical Response**"));
    assert!(outcome.text.contains("0.50"));
}

#[test]
fn malformed_json_falls_back() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let client = GenerationClient::from_config(&config(&server.url()));
    let outcome = client.generate("Poem please", 0.9, None);
    assert!(outcome.is_fallback());
    assert!(outcome.text.contains("**Creative Response**"));
}

#[test]
fn unreachable_backend_gives_factual_fallback_text() {
    let client = GenerationClient::from_config(&config("http://127.0.0.1:9"));
    let outcome = client.generate("What is the capital of Brazil?", 0.2, None);
    assert!(outcome.is_fallback());
    assert!(!outcome.text.is_empty());
    assert!(outcome.text.contains("0.20"));
    assert!(outcome.text.contains("Factual Response"));
}

#[test]
fn health_check_follows_tags_status() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models":[]}"#)
        .create();
    assert!(GenerationClient::from_config(&config(&server.url())).health_check());

    let mut failing = Server::new();
    failing.mock("GET", "/api/tags").with_status(503).create();
    assert!(!GenerationClient::from_config(&config(&failing.url())).health_check());

    assert!(!GenerationClient::from_config(&config("http://127.0.0.1:9")).health_check());
}

#[test]
fn list_models_reads_tags_or_falls_back() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models":[{"name":"mistral:latest","size":1},{"name":"phi3"}]}"#)
        .create();
    let models = GenerationClient::from_config(&config(&server.url())).list_models();
    assert_eq!(models, vec!["mistral:latest", "phi3"]);

    let mut empty = Server::new();
    empty
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models":[]}"#)
        .create();
    let defaults = vec!["llama2", "mistral", "codellama"];
    assert_eq!(GenerationClient::from_config(&config(&empty.url())).list_models(), defaults);
    assert_eq!(
        GenerationClient::from_config(&config("http://127.0.0.1:9")).list_models(),
        defaults
    );
}

#[test]
fn model_info_posts_name_and_tags_errors() {
    let mut server = Server::new();
    let show = server
        .mock("POST", "/api/show")
        .match_body(Matcher::Json(json!({ "name": "codellama" })))
        .with_status(200)
        .with_body(r#"{"details":{"family":"llama"}}"#)
        .create();

    let mut client = GenerationClient::from_config(&config(&server.url()));
    client.set_model("codellama");
    assert_eq!(client.model(), "codellama");
    let info = client.model_info();
    assert_eq!(info["details"]["family"], "llama");
    show.assert();

    let offline = GenerationClient::from_config(&config("http://127.0.0.1:9"));
    let info = offline.model_info();
    assert!(info["error"].as_str().is_some());
}

#[test]
fn backend_reports_connection_errors_as_such() {
    let backend = OllamaBackend::from_config(&config("http://127.0.0.1:9").backend);
    let err = backend
        .generate(&GenerationRequest::new("x", 0.5, 10))
        .unwrap_err();
    assert!(err.is_connection(), "{err:?}");
}

/// Accepts connections into the backlog and never answers.
fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    (listener, url)
}

#[test]
fn stalled_backend_times_out() {
    let (_listener, url) = silent_listener();
    let mut config = config(&url);
    config.backend.generate_timeout_secs = 1;

    let backend = OllamaBackend::from_config(&config.backend);
    let err = backend
        .generate(&GenerationRequest::new("x", 0.5, 10))
        .unwrap_err();
    assert!(matches!(err, GenerationError::Timeout { .. }), "{err:?}");
    assert!(err.is_transient());
}

#[test]
fn stalled_backend_falls_back_with_timeout_reason() {
    let (_listener, url) = silent_listener();
    let mut config = config(&url);
    config.backend.generate_timeout_secs = 1;

    let client = GenerationClient::from_config(&config);
    let outcome = client.generate("What is the boiling point of water?", 0.2, Some(32));
    assert!(outcome.is_fallback());
    match &outcome.source {
        GenerationSource::Fallback { reason } => {
            assert!(reason.contains("timed out"), "{reason}");
        }
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(outcome.text.contains("0.20"));
}
