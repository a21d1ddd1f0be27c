//! OAuth2 token lifecycle for the TD Ameritrade API.
//!
//! [`oauth`] holds the pure pieces: endpoint constants, authorization-URL
//! construction, grant parameter builders, and token response parsing.
//! [`TokenManager`] performs the HTTP exchanges, stores the result in the
//! shared [`CredentialStore`], and notifies registered listeners.

pub mod manager;
pub mod oauth;
pub mod store;

pub use manager::TokenManager;
pub use oauth::build_authorize_url;
pub use store::CredentialStore;
