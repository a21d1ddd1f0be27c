//! The authenticated request executor.
//!
//! One [`Connector`] per OAuth application. `execute` performs a single
//! authenticated call with at-most-one automatic refresh-and-retry on
//! HTTP 401/403; everything else in this crate is a thin parameter-to-URL
//! mapping on top of it.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header;
use serde_json::Value;

use tda_auth::{CredentialStore, TokenManager};
use tda_types::{Credentials, CredentialSource, TdaError, TokenListener, traits::Result};

use crate::request::{Payload, RequestDescriptor, RetryState};

/// Base URL for the TD Ameritrade REST API.
pub const API_URL: &str = "https://api.tdameritrade.com/v1";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("tda-connect/", env!("CARGO_PKG_VERSION"));

/// Builder for [`Connector`].
pub struct ConnectorBuilder {
    client_id: String,
    redirect_uri: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    source: Option<Arc<dyn CredentialSource>>,
    base_url: String,
    token_url: String,
    http: Option<reqwest::Client>,
}

impl ConnectorBuilder {
    /// Starts a builder for the given OAuth application.
    #[must_use]
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            access_token: None,
            refresh_token: None,
            source: None,
            base_url: API_URL.to_string(),
            token_url: tda_auth::oauth::TOKEN_URL.to_string(),
            http: None,
        }
    }

    /// Seeds the connector with an access token.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Seeds the connector with a refresh token.
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Supplies the lazy credential initializer, invoked at most once on the
    /// first request issued without an access token.
    #[must_use]
    pub fn credential_source(mut self, source: Arc<dyn CredentialSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Overrides the API base URL (tests point this at a local server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the OAuth token endpoint URL.
    #[must_use]
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Uses a caller-provided HTTP client (timeouts and TLS settings are the
    /// transport's concern, not the connector's).
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the connector.
    #[must_use]
    pub fn build(self) -> Connector {
        let http = self.http.unwrap_or_default();

        let mut initial = Credentials::new();
        if let Some(access) = self.access_token {
            initial.access_token = Some(access);
        }
        if let Some(refresh) = self.refresh_token {
            initial.refresh_token = Some(refresh);
        }
        let store = Arc::new(CredentialStore::new(initial));

        let tokens = TokenManager::new(
            http.clone(),
            self.client_id,
            self.redirect_uri,
            Arc::clone(&store),
        )
        .with_token_url(self.token_url);

        Connector {
            http,
            base_url: self.base_url,
            store,
            tokens,
            source: self.source,
            bootstrapped: tokio::sync::Mutex::new(false),
        }
    }
}

/// TD Ameritrade API connector.
pub struct Connector {
    http: reqwest::Client,
    base_url: String,
    store: Arc<CredentialStore>,
    tokens: TokenManager,
    source: Option<Arc<dyn CredentialSource>>,
    bootstrapped: tokio::sync::Mutex<bool>,
}

impl Connector {
    /// Starts a [`ConnectorBuilder`].
    #[must_use]
    pub fn builder(
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> ConnectorBuilder {
        ConnectorBuilder::new(client_id, redirect_uri)
    }

    /// The token manager, for code exchange and manual refresh.
    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// The shared credential store.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.store.snapshot()
    }

    /// Registers a listener for every newly issued credential set.
    pub fn subscribe(&self, listener: Arc<dyn TokenListener>) {
        self.tokens.subscribe(listener);
    }

    /// Performs one authenticated call with at-most-one automatic
    /// refresh-and-retry.
    ///
    /// Status handling is deliberately lenient: only 401/403 raise an error.
    /// 2xx, 3xx, and non-auth 4xx/5xx bodies are all parsed as JSON and
    /// returned as `Ok`, so callers must inspect error-shaped fields in the
    /// body themselves.
    ///
    /// # Errors
    ///
    /// [`TdaError::Authentication`] if the API rejects the credential and
    /// the single refresh-and-retry cycle did not fix it; [`TdaError::Http`]
    /// or [`TdaError::Serialization`] on transport or parse failures (never
    /// retried).
    pub async fn execute(&self, req: &RequestDescriptor) -> Result<Value> {
        self.bootstrap().await?;

        let mut state = RetryState::Fresh;
        loop {
            match self.dispatch(req).await {
                Err(TdaError::Authentication(body)) => {
                    if state == RetryState::Retried {
                        return Err(TdaError::Authentication(body));
                    }
                    let Some(refresh) = self.store.refresh_token() else {
                        return Err(TdaError::Authentication(body));
                    };
                    tracing::debug!(path = %req.path, "access token rejected, refreshing");
                    self.tokens.refresh(&refresh).await?;
                    state = RetryState::Retried;
                }
                other => return other,
            }
        }
    }

    /// Runs the credential initializer at most once per connector lifetime.
    ///
    /// Concurrent first calls serialize on the mutex, so only one of them
    /// invokes the source; the rest observe the populated store.
    async fn bootstrap(&self) -> Result<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        if self.store.access_token().is_some() {
            return Ok(());
        }

        let mut done = self.bootstrapped.lock().await;
        if *done || self.store.access_token().is_some() {
            return Ok(());
        }
        let creds = source.credentials().await?;
        self.store.apply(&creds);
        *done = true;
        Ok(())
    }

    async fn dispatch(&self, req: &RequestDescriptor) -> Result<Value> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = self.http.request(req.method.clone(), &url);
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }

        builder = match &req.headers {
            // Caller-supplied headers replace the whole default set.
            Some(headers) => builder.headers(headers.clone()),
            None => {
                // One Content-Type only: form payloads go out with the form
                // content type instead of the JSON default, never both.
                let content_type = match &req.payload {
                    Some(Payload::Form(_)) => "application/x-www-form-urlencoded",
                    _ => "application/json",
                };
                let mut with_defaults = builder
                    .header(header::CONTENT_TYPE, content_type)
                    .header(header::USER_AGENT, USER_AGENT);
                if let Some(token) = self.store.access_token() {
                    with_defaults =
                        with_defaults.header(header::AUTHORIZATION, format!("Bearer {token}"));
                }
                with_defaults
            }
        };

        builder = match &req.payload {
            Some(Payload::Form(body)) => builder.body(body.clone()),
            Some(Payload::Json(value)) => builder.json(value),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "request dispatch failed");
            TdaError::Http(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(TdaError::from)?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TdaError::Authentication(body));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "response body is not valid JSON");
            TdaError::Serialization(e)
        })
    }
}
