//! Settlements: what Flow has paid out to the merchant.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use auth::ParamSet;
use common::DateInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A settlement.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settlement {
    pub id: i64,
    pub date: String,
    #[serde(rename = "taxId", default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "initialBalance", default)]
    pub initial_balance: Option<Decimal>,
    #[serde(rename = "finalBalance", default)]
    pub final_balance: Option<Decimal>,
    #[serde(default)]
    pub transferred: Option<Decimal>,
    #[serde(default)]
    pub billed: Option<Decimal>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Settlement operations.
pub struct Settlements<'a> {
    client: &'a FlowClient,
}

impl<'a> Settlements<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// Settlements issued on a given day.
    ///
    /// GET /settlement/getByDate
    pub async fn get_by_date(&self, date: impl Into<DateInput>) -> Result<Vec<Settlement>, FlowError> {
        let date = FlowClient::require_date(Operation::GetSettlementsByDate, date)?;
        let params = ParamSet::new().with("date", date);
        self.client
            .dispatch(Operation::GetSettlementsByDate, params)
            .await
    }

    /// GET /settlement/getById
    pub async fn get_by_id(&self, settlement_id: i64) -> Result<Settlement, FlowError> {
        let params = ParamSet::new().with("id", settlement_id);
        self.client.dispatch(Operation::GetSettlement, params).await
    }

    /// Settlements issued between two days, inclusive.
    ///
    /// GET /settlement/search
    pub async fn search(
        &self,
        start_date: impl Into<DateInput>,
        end_date: impl Into<DateInput>,
    ) -> Result<Vec<Settlement>, FlowError> {
        let operation = Operation::SearchSettlements;
        let start = FlowClient::require_date(operation, start_date)?;
        let end = FlowClient::require_date(operation, end_date)?;

        // Canonical dates compare correctly as text.
        if start > end {
            return Err(FlowError::InvalidRequest {
                operation,
                message: format!("start date {start} is after end date {end}"),
            });
        }

        let params = ParamSet::new().with("startDate", start).with("endDate", end);
        self.client.dispatch(operation, params).await
    }
}
