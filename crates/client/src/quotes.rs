//! Quote endpoints.

use serde_json::Value;

use tda_types::traits::Result;

use crate::connector::Connector;
use crate::request::RequestDescriptor;

fn quote_descriptor(symbol: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/marketdata/{symbol}/quotes"))
}

fn quotes_descriptor(symbols: &[&str]) -> RequestDescriptor {
    RequestDescriptor::get("/marketdata/quotes").with_query("symbol", symbols.join(","))
}

impl Connector {
    /// Fetch a quote for one symbol.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_quote(&self, symbol: &str) -> Result<Value> {
        self.execute(&quote_descriptor(symbol)).await
    }

    /// Fetch quotes for several symbols in one call.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_quotes(&self, symbols: &[&str]) -> Result<Value> {
        self.execute(&quotes_descriptor(symbols)).await
    }
}
