//! Ephemeral request descriptors and the retry state machine.

use reqwest::Method;
use reqwest::header::HeaderMap;

/// Request body variants.
#[derive(Debug, Clone)]
pub enum Payload {
    /// JSON-serialized on dispatch.
    Json(serde_json::Value),
    /// Already form-urlencoded; sent verbatim with the form content type.
    Form(String),
}

/// One request, built per call and dropped after dispatch.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the connector's base URL, e.g. `/accounts`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub payload: Option<Payload>,
    /// When set, replaces the connector's entire default header set
    /// (including `Authorization`), rather than merging with it.
    pub headers: Option<HeaderMap>,
}

impl RequestDescriptor {
    /// A request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: None,
            headers: None,
        }
    }

    /// A GET request for the given path.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Appends one query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends every pair in `pairs`.
    #[must_use]
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attaches a payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Replaces the default header set with `headers`.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Per-call retry state.
///
/// A request starts `Fresh`; after the single refresh-and-retry cycle it is
/// `Retried`, which is terminal for authentication errors. The state is
/// local to one logical call and never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Fresh,
    Retried,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_descriptor_defaults() {
        let req = RequestDescriptor::get("/accounts");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/accounts");
        assert!(req.query.is_empty());
        assert!(req.payload.is_none());
        assert!(req.headers.is_none());
    }

    #[test]
    fn test_with_query_accumulates() {
        let req = RequestDescriptor::get("/marketdata/quotes")
            .with_query("symbol", "SPY,QQQ")
            .with_query_pairs(vec![("apikey".into(), "k".into())]);
        assert_eq!(
            req.query,
            vec![
                ("symbol".to_string(), "SPY,QQQ".to_string()),
                ("apikey".to_string(), "k".to_string()),
            ]
        );
    }

    #[test]
    fn test_retry_state_transitions() {
        let state = RetryState::Fresh;
        assert_ne!(state, RetryState::Retried);
    }
}
