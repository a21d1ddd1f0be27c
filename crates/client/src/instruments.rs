//! Instrument search and lookup endpoints.

use serde_json::Value;

use tda_types::traits::Result;

use crate::connector::Connector;
use crate::request::RequestDescriptor;

/// Search projection for `GET /instruments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    SymbolSearch,
    SymbolRegex,
    DescSearch,
    DescRegex,
    Fundamental,
}

impl Projection {
    /// The wire value for the `projection` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SymbolSearch => "symbol-search",
            Self::SymbolRegex => "symbol-regex",
            Self::DescSearch => "desc-search",
            Self::DescRegex => "desc-regex",
            Self::Fundamental => "fundamental",
        }
    }
}

fn search_descriptor(symbol: &str, projection: Projection) -> RequestDescriptor {
    RequestDescriptor::get("/instruments")
        .with_query("symbol", symbol)
        .with_query("projection", projection.as_str())
}

fn instrument_descriptor(cusip: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/instruments/{cusip}"))
}

impl Connector {
    /// Search instruments by symbol, description, or fundamental data.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn search_instruments(
        &self,
        symbol: &str,
        projection: Projection,
    ) -> Result<Value> {
        self.execute(&search_descriptor(symbol, projection)).await
    }

    /// Fetch a single instrument by CUSIP.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_instrument(&self, cusip: &str) -> Result<Value> {
        self.execute(&instrument_descriptor(cusip)).await
    }
}
