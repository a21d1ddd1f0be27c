//! Unified error type for the tda-connect workspace.

use thiserror::Error;

/// Enumerates all error kinds that can occur across tda-connect crates.
#[derive(Debug, Error)]
pub enum TdaError {
    /// The API rejected the bearer credential (HTTP 401 or 403).
    ///
    /// Carries the serialized response body. This is the only error kind
    /// that triggers the executor's one-shot refresh-and-retry cycle.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Structured API-level error.
    ///
    /// Reserved for future signaling of non-auth API failures; today
    /// non-auth error bodies are passed through to the caller as ordinary
    /// results and this variant is never constructed.
    #[error("api error: status={status}, body={body}")]
    Api { status: u16, body: String },

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required credential (access or refresh token) is not held.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

impl From<reqwest::Error> for TdaError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl TdaError {
    /// Returns `true` if the error came from a 401/403 response and is
    /// therefore eligible for the refresh-and-retry cycle.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_authentication() {
        let err = TdaError::Authentication("{\"error\":\"expired\"}".to_string());
        assert_eq!(
            err.to_string(),
            "authentication error: {\"error\":\"expired\"}"
        );
    }

    #[test]
    fn test_error_display_api() {
        let err = TdaError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("429"));
        assert!(s.contains("rate limited"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid {{{").unwrap_err();
        let err: TdaError = json_err.into();
        assert!(matches!(err, TdaError::Serialization(_)));
    }

    #[test]
    fn test_is_authentication() {
        assert!(TdaError::Authentication(String::new()).is_authentication());
        assert!(!TdaError::Http("connection refused".into()).is_authentication());
        assert!(!TdaError::MissingCredentials("refresh token".into()).is_authentication());
        assert!(
            !TdaError::Api {
                status: 500,
                body: String::new()
            }
            .is_authentication()
        );
    }
}
