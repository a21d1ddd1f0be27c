//! Single-owner in-memory credential store.
//!
//! The connector and the token manager share one `CredentialStore`, so a
//! refresh triggered by any in-flight request is immediately visible to all
//! others. The lock makes concurrent bootstrap/refresh updates safe.

use std::sync::RwLock;
use tda_types::Credentials;

/// Mutable credential state shared across a connector instance.
pub struct CredentialStore {
    inner: RwLock<Credentials>,
}

impl CredentialStore {
    /// Creates a store seeded with the given credentials.
    #[must_use]
    pub fn new(initial: Credentials) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    /// Returns a copy of the full credential set.
    #[must_use]
    pub fn snapshot(&self) -> Credentials {
        self.inner.read().unwrap().clone()
    }

    /// Returns the current access token, if one is held.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner.read().unwrap().access_token.clone()
    }

    /// Returns the current refresh token, if one is held.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().unwrap().refresh_token.clone()
    }

    /// Applies a partial update under the write lock; fields absent from
    /// `update` keep their current value.
    pub fn apply(&self, update: &Credentials) {
        self.inner.write().unwrap().merge(update);
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(Credentials::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = CredentialStore::default();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_apply_and_read() {
        let store = CredentialStore::default();
        store.apply(&Credentials::new().with_access("at").with_refresh("rt"));
        assert_eq!(store.access_token().as_deref(), Some("at"));
        assert_eq!(store.refresh_token().as_deref(), Some("rt"));
    }

    #[test]
    fn test_apply_is_partial() {
        let store = CredentialStore::new(Credentials::new().with_access("at-1"));
        store.apply(&Credentials::new().with_refresh("rt-1"));
        // A refresh-token-only update leaves the access token untouched.
        assert_eq!(store.access_token().as_deref(), Some("at-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("rt-1"));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let store = CredentialStore::new(Credentials::new().with_access("at-1"));
        let snap = store.snapshot();
        store.apply(&Credentials::new().with_access("at-2"));
        assert_eq!(snap.access_token.as_deref(), Some("at-1"));
        assert_eq!(store.access_token().as_deref(), Some("at-2"));
    }
}
