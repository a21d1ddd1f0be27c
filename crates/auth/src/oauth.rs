//! TD Ameritrade OAuth 2.0 authorization-code flow.
//!
//! Pure URL and parameter construction plus token response parsing; the
//! HTTP exchanges themselves live in [`crate::TokenManager`].

use tda_types::{Credentials, TdaError, traits::Result};

/// TD Ameritrade OAuth authorization endpoint.
pub const AUTH_URL: &str = "https://auth.tdameritrade.com/auth";

/// TD Ameritrade OAuth token endpoint.
pub const TOKEN_URL: &str = "https://api.tdameritrade.com/v1/oauth2/token";

/// OAuth application-partner suffix appended to every client id.
pub const CLIENT_ID_SUFFIX: &str = "@AMER.OAUTHAP";

/// The client id as sent on the wire: the registered consumer key with the
/// application-partner suffix appended.
#[must_use]
pub fn oauth_client_id(client_id: &str) -> String {
    format!("{client_id}{CLIENT_ID_SUFFIX}")
}

/// Build the authorization URL the user visits to obtain a code grant.
///
/// `redirect_uri` and the suffixed client id are URL-encoded.
#[must_use]
pub fn build_authorize_url(client_id: &str, redirect_uri: &str) -> String {
    let suffixed = oauth_client_id(client_id);
    let params = [
        ("redirect_uri", redirect_uri),
        ("client_id", suffixed.as_str()),
    ];
    let query = serde_urlencoded::to_string(params).unwrap_or_default();
    format!("{AUTH_URL}?response_type=code&{query}")
}

/// Build the form-urlencoded parameters for the authorization-code grant.
#[must_use]
pub fn authorization_code_params(
    code: &str,
    client_id: &str,
    redirect_uri: &str,
) -> [(&'static str, String); 5] {
    [
        ("grant_type", "authorization_code".to_string()),
        ("access_type", "offline".to_string()),
        ("code", code.to_string()),
        ("client_id", oauth_client_id(client_id)),
        ("redirect_uri", redirect_uri.to_string()),
    ]
}

/// Build the form-urlencoded parameters for the refresh-token grant.
#[must_use]
pub fn refresh_token_params(
    refresh_token: &str,
    client_id: &str,
    redirect_uri: &str,
) -> [(&'static str, String); 4] {
    [
        ("grant_type", "refresh_token".to_string()),
        ("refresh_token", refresh_token.to_string()),
        ("client_id", oauth_client_id(client_id)),
        ("redirect_uri", redirect_uri.to_string()),
    ]
}

/// Parse the token endpoint JSON response into [`Credentials`].
///
/// Refresh responses may carry only a subset of fields, so every field is
/// optional; the response is rejected only when it contains neither an
/// access nor a refresh token.
///
/// # Errors
///
/// Returns [`TdaError::MissingCredentials`] if no token field is present,
/// or [`TdaError::Serialization`] if a present field has the wrong shape.
pub fn parse_token_response(json: &serde_json::Value) -> Result<Credentials> {
    let creds: Credentials = serde_json::from_value(json.clone())?;
    if creds.is_empty() {
        return Err(TdaError::MissingCredentials(
            "token response carries neither access_token nor refresh_token".into(),
        ));
    }
    Ok(creds)
}
