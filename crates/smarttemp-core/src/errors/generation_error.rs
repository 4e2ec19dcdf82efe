/// Generation backend errors.
///
/// Backends return these; `GenerationClient` absorbs every one of them into
/// fallback text, so they never reach the caller of `generate`.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("connection failed to {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("backend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("request failed: {reason}")]
    Request { reason: String },
}

impl GenerationError {
    /// The backend could not be reached at all. Treated as "backend absent".
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Worth retrying: timeouts and server-side (5xx) statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_is_never_transient() {
        let err = GenerationError::Connection {
            url: "http://localhost:1".into(),
            reason: "refused".into(),
        };
        assert!(err.is_connection());
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        let server = GenerationError::HttpStatus {
            status: 503,
            body: String::new(),
        };
        let client = GenerationError::HttpStatus {
            status: 404,
            body: String::new(),
        };
        assert!(server.is_transient());
        assert!(!client.is_transient());
        assert!(GenerationError::Timeout { url: "x".into() }.is_transient());
    }
}
