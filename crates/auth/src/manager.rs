//! Token manager: performs the OAuth grants and fans out notifications.
//!
//! Every successful exchange or refresh is applied to the shared
//! [`CredentialStore`] and delivered synchronously to each registered
//! [`TokenListener`], in registration order, before the call returns.
//! Persistence is the listeners' job; the manager never touches disk.

use std::sync::{Arc, Mutex};

use tda_types::{Credentials, TdaError, TokenListener, traits::Result};

use crate::oauth;
use crate::store::CredentialStore;

/// Obtains and refreshes OAuth2 credentials for one connector instance.
pub struct TokenManager {
    http: reqwest::Client,
    client_id: String,
    redirect_uri: String,
    token_url: String,
    store: Arc<CredentialStore>,
    listeners: Mutex<Vec<Arc<dyn TokenListener>>>,
}

impl TokenManager {
    /// Creates a manager for the given OAuth application and shared store.
    pub fn new(
        http: reqwest::Client,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        store: Arc<CredentialStore>,
    ) -> Self {
        Self {
            http,
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            token_url: oauth::TOKEN_URL.to_string(),
            store,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Overrides the token endpoint URL (tests point this at a local server).
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// The credential store this manager writes to.
    #[must_use]
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Registers a listener for every newly issued credential set.
    pub fn subscribe(&self, listener: Arc<dyn TokenListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    /// Exchanges an authorization code for a credential set.
    ///
    /// # Errors
    ///
    /// Returns [`TdaError::Authentication`] if the token endpoint rejects
    /// the grant, [`TdaError::Http`] on transport failure, or a parse error
    /// if the response body is not valid JSON.
    pub async fn exchange_code(&self, code: &str) -> Result<Credentials> {
        let params = oauth::authorization_code_params(code, &self.client_id, &self.redirect_uri);
        self.grant("authorization_code", &params).await
    }

    /// Exchanges a refresh token for a new credential set.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TokenManager::exchange_code`].
    pub async fn refresh(&self, refresh_token: &str) -> Result<Credentials> {
        let params =
            oauth::refresh_token_params(refresh_token, &self.client_id, &self.redirect_uri);
        self.grant("refresh_token", &params).await
    }

    async fn grant(&self, grant_type: &str, params: &[(&str, String)]) -> Result<Credentials> {
        tracing::debug!(grant_type, "requesting token grant");

        let resp = self
            .http
            .post(&self.token_url)
            .form(params)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(grant_type, error = %e, "token endpoint unreachable");
                TdaError::Http(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(TdaError::from)?;
        if !status.is_success() {
            tracing::warn!(grant_type, status = status.as_u16(), "token grant rejected");
            return Err(TdaError::Authentication(body));
        }

        let json: serde_json::Value = serde_json::from_str(&body)?;
        let creds = oauth::parse_token_response(&json)?;
        self.store.apply(&creds);
        self.notify(&creds);
        Ok(creds)
    }

    /// Delivers the credential set to each listener, synchronously and in
    /// registration order.
    fn notify(&self, creds: &Credentials) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener.on_token(creds);
        }
    }
}
