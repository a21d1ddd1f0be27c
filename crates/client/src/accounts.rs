//! Account endpoints.

use serde_json::Value;

use tda_types::traits::Result;

use crate::connector::Connector;
use crate::request::RequestDescriptor;

fn account_descriptor(account_id: &str, fields: Option<&str>) -> RequestDescriptor {
    let mut req = RequestDescriptor::get(format!("/accounts/{account_id}"));
    if let Some(fields) = fields {
        req = req.with_query("fields", fields);
    }
    req
}

fn accounts_descriptor(fields: Option<&str>) -> RequestDescriptor {
    let mut req = RequestDescriptor::get("/accounts");
    if let Some(fields) = fields {
        req = req.with_query("fields", fields);
    }
    req
}

impl Connector {
    /// Fetch a single account, optionally with extra `fields`
    /// (e.g. `"positions,orders"`).
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_account(&self, account_id: &str, fields: Option<&str>) -> Result<Value> {
        self.execute(&account_descriptor(account_id, fields)).await
    }

    /// Fetch all linked accounts.
    ///
    /// # Errors
    ///
    /// See [`Connector::execute`].
    pub async fn get_accounts(&self, fields: Option<&str>) -> Result<Value> {
        self.execute(&accounts_descriptor(fields)).await
    }
}
