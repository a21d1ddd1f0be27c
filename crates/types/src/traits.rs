//! Traits shared across all tda-connect crates.
//!
//! Cross-crate abstractions live here so that higher layers depend only on
//! `tda-types`, not on each other.

use crate::{Credentials, TdaError};
use async_trait::async_trait;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TdaError>;

/// Lazily sources stored credentials for a connector.
///
/// The connector invokes this at most once over its lifetime, on the first
/// request issued without an access token. Typical implementations read a
/// credential set previously persisted by a [`TokenListener`].
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Produce a credential set, e.g. by loading it from disk.
    async fn credentials(&self) -> Result<Credentials>;
}

/// Observes every credential set issued by the token endpoint.
///
/// Listeners are notified synchronously, in registration order, exactly once
/// per successful code exchange or refresh, before the exchanging call
/// returns. The payload is the full parsed response so listeners can persist
/// it externally.
pub trait TokenListener: Send + Sync {
    /// Called with each newly obtained or refreshed credential set.
    fn on_token(&self, credentials: &Credentials);
}
