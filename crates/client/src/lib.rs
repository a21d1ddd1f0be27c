//! TD Ameritrade API connector: authenticated request executor plus thin
//! read-only endpoint mappings.
//!
//! The interesting piece is [`Connector::execute`]: one authenticated call
//! with at-most-one automatic token-refresh-and-retry on HTTP 401/403.
//! Domain methods (`get_quote`, `get_accounts`, ...) are one-line mappings
//! onto it and return raw `serde_json::Value` bodies.
//!
//! ```no_run
//! use tda_client::Connector;
//!
//! # async fn run() -> tda_types::Result<()> {
//! let connector = Connector::builder("ABC123", "https://localhost:8443/cb")
//!     .refresh_token("stored-refresh-token")
//!     .build();
//! let quote = connector.get_quote("SPY").await?;
//! println!("{quote}");
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod connector;
pub mod history;
pub mod instruments;
pub mod quotes;
pub mod request;
pub mod transactions;

pub use connector::{API_URL, Connector, ConnectorBuilder, USER_AGENT};
pub use history::PriceHistoryQuery;
pub use instruments::Projection;
pub use request::{Payload, RequestDescriptor, RetryState};
pub use transactions::TransactionQuery;

pub use tda_auth::build_authorize_url;
pub use tda_types::{Credentials, CredentialSource, TdaError, TokenListener};
