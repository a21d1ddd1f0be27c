//! Price history endpoint.

use serde_json::Value;

use tda_types::traits::Result;

use crate::connector::Connector;
use crate::request::RequestDescriptor;

/// Query parameters for `GET /marketdata/{symbol}/pricehistory`.
///
/// All fields are optional; the API applies its own defaults for absent
/// parameters. Dates are epoch milliseconds.
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryQuery {
    /// `day`, `month`, `year`, or `ytd`.
    pub period_type: Option<String>,
    pub period: Option<u32>,
    /// `minute`, `daily`, `weekly`, or `monthly`.
    pub frequency_type: Option<String>,
    pub frequency: Option<u32>,
    pub start_date: Option<u64>,
    pub end_date: Option<u64>,
    pub need_extended_hours_data: Option<bool>,
}

impl PriceHistoryQuery {
    /// The camelCase query pairs the API expects, in declaration order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(period_type) = &self.period_type {
            pairs.push(("periodType".to_string(), period_type.clone()));
        }
        if let Some(period) = self.period {
            pairs.push(("period".to_string(), period.to_string()));
        }
        if let Some(frequency_type) = &self.frequency_type {
            pairs.push(("frequencyType".to_string(), frequency_type.clone()));
        }
        if let Some(frequency) = self.frequency {
            pairs.push(("frequency".to_string(), frequency.to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate".to_string(), start.to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate".to_string(), end.to_string()));
        }
        if let Some(extended) = self.need_extended_hours_data {
            pairs.push(("needExtendedHoursData".to_string(), extended.to_string()));
        }
        pairs
    }
}

fn history_descriptor(symbol: &str, query: &PriceHistoryQuery) -> RequestDescriptor {
    RequestDescriptor::get(format!("/marketdata/{symbol}/pricehistory"))
        .with_query_pairs(query.pairs())
}

impl Connector {
    /// Fetch candle history for a symbol.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_price_history(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<Value> {
        self.execute(&history_descriptor(symbol, query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(PriceHistoryQuery::default().pairs().is_empty());
    }

    #[test]
    fn test_pairs_camel_case_names() {
        let query = PriceHistoryQuery {
            period_type: Some("day".into()),
            period: Some(10),
            frequency_type: Some("minute".into()),
            frequency: Some(5),
            start_date: Some(1_609_459_200_000),
            end_date: Some(1_612_137_600_000),
            need_extended_hours_data: Some(false),
        };
        let pairs = query.pairs();
        assert_eq!(
            pairs,
            vec![
                ("periodType".to_string(), "day".to_string()),
                ("period".to_string(), "10".to_string()),
                ("frequencyType".to_string(), "minute".to_string()),
                ("frequency".to_string(), "5".to_string()),
                ("startDate".to_string(), "1609459200000".to_string()),
                ("endDate".to_string(), "1612137600000".to_string()),
                ("needExtendedHoursData".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_history_descriptor_path() {
        let req = history_descriptor("SPY", &PriceHistoryQuery::default());
        assert_eq!(req.path, "/marketdata/SPY/pricehistory");
    }
}
