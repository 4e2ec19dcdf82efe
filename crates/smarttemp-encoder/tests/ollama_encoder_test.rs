//! Ollama encoder against a mock server.

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;
use smarttemp_core::config::EncoderConfig;
use smarttemp_core::traits::IPromptEncoder;
use smarttemp_encoder::{create_encoder, OllamaEncoder};

fn encoder(url: &str, dims: usize) -> OllamaEncoder {
    OllamaEncoder::new(url, "all-minilm", dims, Duration::from_secs(2))
}

#[test]
fn unavailable_until_health_check_passes() {
    let mut server = Server::new();
    let tags = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models":[]}"#)
        .create();

    let enc = encoder(&server.url(), 4);
    assert!(!enc.is_available());
    assert!(enc.encode("hello").is_err());

    assert!(enc.health_check());
    assert!(enc.is_available());
    tags.assert();
}

#[test]
fn encode_posts_model_and_input_and_resizes() {
    let mut server = Server::new();
    server.mock("GET", "/api/tags").with_status(200).create();
    let embed = server
        .mock("POST", "/api/embed")
        .match_body(Matcher::PartialJson(json!({
            "model": "all-minilm",
            "input": ["hello world"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"embeddings":[[0.5, 0.25]]}"#)
        .create();

    let enc = encoder(&server.url(), 4);
    assert!(enc.health_check());
    let v = enc.encode("hello world").unwrap();
    assert_eq!(v, vec![0.5, 0.25, 0.0, 0.0]);
    embed.assert();
}

#[test]
fn server_error_is_an_encoder_error() {
    let mut server = Server::new();
    server.mock("GET", "/api/tags").with_status(200).create();
    server
        .mock("POST", "/api/embed")
        .with_status(500)
        .with_body("model not loaded")
        .create();

    let enc = encoder(&server.url(), 4);
    assert!(enc.health_check());
    let err = enc.encode("hi").unwrap_err();
    assert!(err.to_string().contains("500"), "{err}");
}

#[test]
fn batch_count_mismatch_is_rejected() {
    let mut server = Server::new();
    server.mock("GET", "/api/tags").with_status(200).create();
    server
        .mock("POST", "/api/embed")
        .with_status(200)
        .with_body(r#"{"embeddings":[[1.0]]}"#)
        .create();

    let enc = encoder(&server.url(), 1);
    assert!(enc.health_check());
    let texts = vec!["a".to_string(), "b".to_string()];
    assert!(enc.encode_batch(&texts).is_err());
}

#[test]
fn factory_falls_back_to_hashing_when_ollama_is_down() {
    let config = EncoderConfig {
        provider: "ollama".into(),
        ollama_url: "http://127.0.0.1:9".into(),
        dimensions: 32,
        timeout_secs: 1,
        ..Default::default()
    };
    let enc = create_encoder(&config);
    assert_eq!(enc.name(), "hashing");
    assert_eq!(enc.dimensions(), 32);
}

#[test]
fn factory_uses_ollama_when_healthy() {
    let mut server = Server::new();
    server.mock("GET", "/api/tags").with_status(200).create();
    let config = EncoderConfig {
        provider: "ollama".into(),
        ollama_url: server.url(),
        ollama_model: "nomic-embed-text".into(),
        ..Default::default()
    };
    let enc = create_encoder(&config);
    assert_eq!(enc.name(), "nomic-embed-text");
    assert!(enc.is_available());
}
