//! Refunds of paid orders.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use auth::ParamSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for `refund/create`.
///
/// Identify the original payment with either `commerce_trx_id` or
/// `flow_trx_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRefundRequest {
    /// Merchant-side identifier of this refund.
    pub refund_commerce_order: String,
    /// Email of the person receiving the refund.
    pub receiver_email: String,
    pub amount: Decimal,
    /// Where Flow reports the refund outcome.
    pub url_callback: String,
    /// Merchant order of the original payment.
    pub commerce_trx_id: Option<String>,
    /// Flow order of the original payment.
    pub flow_trx_id: Option<i64>,
}

impl CreateRefundRequest {
    fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params
            .insert("refundCommerceOrder", &self.refund_commerce_order)
            .insert("receiverEmail", &self.receiver_email)
            .insert("amount", self.amount)
            .insert("urlCallBack", &self.url_callback)
            .insert_opt("commerceTrxId", self.commerce_trx_id.as_deref())
            .insert_opt("flowTrxId", self.flow_trx_id);
        params
    }
}

/// Refund state as reported by Flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Refund {
    pub token: String,
    #[serde(rename = "flowRefundOrder", deserialize_with = "crate::de::id_string")]
    pub flow_refund_order: String,
    #[serde(default)]
    pub date: Option<String>,
    /// `created`, `accepted`, `rejected`, `refunded` or `canceled`.
    pub status: String,
    pub amount: Decimal,
    #[serde(default)]
    pub fee: Option<Decimal>,
}

/// Refund operations.
pub struct Refunds<'a> {
    client: &'a FlowClient,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// Request a refund.
    ///
    /// POST /refund/create
    pub async fn create(&self, request: &CreateRefundRequest) -> Result<Refund, FlowError> {
        if request.commerce_trx_id.is_none() && request.flow_trx_id.is_none() {
            return Err(FlowError::InvalidRequest {
                operation: Operation::CreateRefund,
                message: "either commerce_trx_id or flow_trx_id is required".into(),
            });
        }

        tracing::info!(
            refund_commerce_order = %request.refund_commerce_order,
            amount = %request.amount,
            "Creating refund"
        );

        let refund: Refund = self
            .client
            .dispatch(Operation::CreateRefund, request.to_params())
            .await?;

        tracing::info!(
            flow_refund_order = %refund.flow_refund_order,
            status = %refund.status,
            "Refund created"
        );

        Ok(refund)
    }

    /// Cancel a refund that has not been processed yet.
    ///
    /// POST /refund/cancel
    pub async fn cancel(&self, token: &str) -> Result<Refund, FlowError> {
        let params = ParamSet::new().with("token", token);
        self.client.dispatch(Operation::CancelRefund, params).await
    }

    /// Get the state of a refund.
    ///
    /// GET /refund/getStatus
    pub async fn get_status(&self, token: &str) -> Result<Refund, FlowError> {
        let params = ParamSet::new().with("token", token);
        self.client.dispatch(Operation::GetRefundStatus, params).await
    }
}
