//! Blocking JSON-over-HTTP transport shared by the backends.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smarttemp_core::errors::GenerationError;

/// Thin wrapper over a blocking `reqwest` client.
///
/// The client-wide timeout is the connect/default bound; every call passes
/// its own, usually different, per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, default_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(default_timeout)
            .gzip(true)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer {token}` on every request.
    /// Empty tokens are ignored.
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        timeout: Duration,
    ) -> Result<T, GenerationError> {
        let url = self.url(path);
        let body = self.execute(self.client.get(&url), &url, timeout)?;
        parse_body(&body)
    }

    pub fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
        timeout: Duration,
    ) -> Result<T, GenerationError> {
        let url = self.url(path);
        let body = self.execute(self.client.post(&url).json(payload), &url, timeout)?;
        parse_body(&body)
    }

    /// GET `path` and succeed only on a 2xx status. The body is ignored.
    pub fn probe(&self, path: &str, timeout: Duration) -> Result<(), GenerationError> {
        let url = self.url(path);
        self.execute(self.client.get(&url), &url, timeout).map(|_| ())
    }

    fn execute(
        &self,
        request: RequestBuilder,
        url: &str,
        timeout: Duration,
    ) -> Result<String, GenerationError> {
        let mut request = request.timeout(timeout);
        if let Some(ref token) = self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| map_send_error(url, e))?;
        let status = response.status();
        let body = response.text().map_err(|e| map_send_error(url, e))?;
        if !status.is_success() {
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                body: truncate(&body, 512),
            });
        }
        Ok(body)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, GenerationError> {
    serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse {
        reason: format!("invalid JSON: {e}"),
    })
}

/// Classify a `reqwest` failure.
///
/// Builder errors (e.g. a malformed base URL) count as connection failures:
/// nothing was ever reachable.
pub fn map_send_error(url: &str, e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() || e.is_builder() {
        GenerationError::Connection {
            url: url.to_string(),
            reason: e.to_string(),
        }
    } else if e.is_decode() {
        GenerationError::MalformedResponse {
            reason: e.to_string(),
        }
    } else {
        GenerationError::Request {
            reason: e.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let t = HttpTransport::new("http://localhost:11434/", Duration::from_secs(1));
        assert_eq!(t.url("/api/tags"), "http://localhost:11434/api/tags");
    }

    #[test]
    fn malformed_base_url_is_a_connection_failure() {
        let t = HttpTransport::new("not a url", Duration::from_secs(1));
        let err = t.probe("/api/tags", Duration::from_secs(1)).unwrap_err();
        assert!(err.is_connection(), "{err:?}");
    }

    #[test]
    fn long_bodies_are_truncated() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ab", 3), "ab");
    }
}
