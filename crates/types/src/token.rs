//! OAuth credential representation and partial-update semantics.

use serde::{Deserialize, Serialize};

/// A credential set as returned by the token endpoint.
///
/// Every field is optional because a refresh response may carry only a
/// subset (commonly omitting `refresh_token`). [`Credentials::merge`]
/// implements the partial-update rule: present fields overwrite, absent
/// fields leave the prior value untouched.
///
/// Credentials live only in process memory for the lifetime of a connector;
/// persistence is the caller's job, via
/// [`TokenListener`](crate::TokenListener).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Refresh token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl Credentials {
    /// Create an empty credential set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an access token.
    #[must_use]
    pub fn with_access(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Attach a refresh token.
    #[must_use]
    pub fn with_refresh(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Apply a partial update: fields present in `update` overwrite the
    /// current value, fields absent in `update` are left untouched.
    pub fn merge(&mut self, update: &Self) {
        if let Some(access) = &update.access_token {
            self.access_token = Some(access.clone());
        }
        if let Some(refresh) = &update.refresh_token {
            self.refresh_token = Some(refresh.clone());
        }
        if let Some(expires_in) = update.expires_in {
            self.expires_in = Some(expires_in);
        }
        if let Some(refresh_expires_in) = update.refresh_token_expires_in {
            self.refresh_token_expires_in = Some(refresh_expires_in);
        }
        if let Some(scope) = &update.scope {
            self.scope = Some(scope.clone());
        }
        if let Some(token_type) = &update.token_type {
            self.token_type = Some(token_type.clone());
        }
    }

    /// Returns `true` if neither an access nor a refresh token is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}
