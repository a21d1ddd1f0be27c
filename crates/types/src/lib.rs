//! Core types and traits for the tda-connect workspace.
//!
//! This crate defines the shared abstractions used across all layers of the
//! TD Ameritrade connector: the error taxonomy, the credential
//! representation with its partial-update semantics, and the traits callers
//! implement to source and observe credentials.

pub mod error;
pub mod token;
pub mod traits;

pub use error::TdaError;
pub use token::Credentials;
pub use traits::{CredentialSource, Result, TokenListener};
