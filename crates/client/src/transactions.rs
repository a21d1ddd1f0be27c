//! Transaction history endpoints.

use serde_json::Value;

use tda_types::traits::Result;

use crate::connector::Connector;
use crate::request::RequestDescriptor;

/// Query parameters for `GET /accounts/{id}/transactions`.
///
/// Dates use the API's `yyyy-MM-dd` format.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Transaction type filter, e.g. `ALL`, `TRADE`, `DIVIDEND`.
    pub transaction_type: Option<String>,
    pub symbol: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TransactionQuery {
    /// The query pairs the API expects.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(transaction_type) = &self.transaction_type {
            pairs.push(("type".to_string(), transaction_type.clone()));
        }
        if let Some(symbol) = &self.symbol {
            pairs.push(("symbol".to_string(), symbol.clone()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("startDate".to_string(), start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate".to_string(), end.clone()));
        }
        pairs
    }
}

fn transactions_descriptor(account_id: &str, query: &TransactionQuery) -> RequestDescriptor {
    RequestDescriptor::get(format!("/accounts/{account_id}/transactions"))
        .with_query_pairs(query.pairs())
}

fn transaction_descriptor(account_id: &str, transaction_id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!(
        "/accounts/{account_id}/transactions/{transaction_id}"
    ))
}

impl Connector {
    /// Fetch transactions for an account, filtered by `query`.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_transactions(
        &self,
        account_id: &str,
        query: &TransactionQuery,
    ) -> Result<Value> {
        self.execute(&transactions_descriptor(account_id, query))
            .await
    }

    /// Fetch a single transaction.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Value> {
        self.execute(&transaction_descriptor(account_id, transaction_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_descriptor() {
        let query = TransactionQuery {
            transaction_type: Some("TRADE".into()),
            symbol: Some("SPY".into()),
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-06-30".into()),
        };
        let req = transactions_descriptor("12345678", &query);
        assert_eq!(req.path, "/accounts/12345678/transactions");
        assert_eq!(
            req.query,
            vec![
                ("type".to_string(), "TRADE".to_string()),
                ("symbol".to_string(), "SPY".to_string()),
                ("startDate".to_string(), "2024-01-01".to_string()),
                ("endDate".to_string(), "2024-06-30".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        let req = transactions_descriptor("12345678", &TransactionQuery::default());
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_transaction_descriptor() {
        let req = transaction_descriptor("12345678", "987654321");
        assert_eq!(req.path, "/accounts/12345678/transactions/987654321");
    }
}
