//! Subscription invoices.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use common::DateInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payment received outside Flow, recorded against an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct OutsidePaymentRequest {
    pub invoice_id: i64,
    /// Day the payment was received.
    pub date: DateInput,
    pub comment: String,
    pub amount: Decimal,
}

/// An invoice.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(rename = "subscriptionId", default)]
    pub subscription_id: Option<String>,
    #[serde(rename = "customerId", default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub period_start: Option<String>,
    #[serde(default)]
    pub period_end: Option<String>,
    #[serde(default)]
    pub attemp_count: Option<i64>,
    #[serde(default)]
    pub attemped: Option<i64>,
    #[serde(default)]
    pub next_attemp_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// 0 unpaid, 1 paid, 2 cancelled.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub error: Option<i64>,
    #[serde(rename = "errorDate", default)]
    pub error_date: Option<String>,
    #[serde(rename = "errorDescription", default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub payment: Option<Value>,
    #[serde(rename = "outsidePayment", default)]
    pub outside_payment: Option<Value>,
    #[serde(rename = "paymentLink", default)]
    pub payment_link: Option<String>,
}

/// Invoice operations.
pub struct Invoices<'a> {
    client: &'a FlowClient,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// GET /invoice/get
    pub async fn get(&self, invoice_id: i64) -> Result<Invoice, FlowError> {
        let params = ParamSet::new().with("invoiceId", invoice_id);
        self.client.dispatch(Operation::GetInvoice, params).await
    }

    /// Cancel an unpaid invoice.
    ///
    /// POST /invoice/cancel
    pub async fn cancel(&self, invoice_id: i64) -> Result<Invoice, FlowError> {
        let params = ParamSet::new().with("invoiceId", invoice_id);
        self.client.dispatch(Operation::CancelInvoice, params).await
    }

    /// Mark an invoice paid by an outside payment.
    ///
    /// POST /invoice/outsidePayment
    ///
    /// The date is canonicalized first; an unreadable date fails with
    /// `FlowError::InvalidDate` and no request is sent.
    pub async fn record_outside_payment(
        &self,
        request: &OutsidePaymentRequest,
    ) -> Result<Invoice, FlowError> {
        let date = FlowClient::require_date(Operation::RecordOutsidePayment, request.date.clone())?;

        let params = ParamSet::new()
            .with("invoiceId", request.invoice_id)
            .with("date", date)
            .with("comment", &request.comment)
            .with("amount", request.amount);

        tracing::info!(
            invoice_id = request.invoice_id,
            amount = %request.amount,
            "Recording outside payment"
        );

        self.client
            .dispatch(Operation::RecordOutsidePayment, params)
            .await
    }

    /// List overdue invoices, optionally for one plan.
    ///
    /// GET /invoice/getOverDue
    pub async fn list_overdue(
        &self,
        plan_id: Option<&str>,
        query: &ListQuery,
    ) -> Result<PaginatedList<Invoice>, FlowError> {
        let mut params = ParamSet::new();
        params.insert_opt("planId", plan_id);
        query.apply(&mut params);
        self.client
            .dispatch(Operation::ListOverdueInvoices, params)
            .await
    }

    /// Ask Flow to charge an overdue invoice again.
    ///
    /// POST /invoice/retryToCollect
    pub async fn retry_collection(&self, invoice_id: i64) -> Result<Invoice, FlowError> {
        let params = ParamSet::new().with("invoiceId", invoice_id);
        self.client
            .dispatch(Operation::RetryInvoiceCollection, params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_invoice() {
        let json = r#"{
            "id": 1034,
            "subscriptionId": "sus_azcyjj9ycd",
            "customerId": "cus_onoolldvec",
            "created": "2018-06-26 17:29:06",
            "subject": "Gold plan",
            "currency": "CLP",
            "amount": 20000,
            "period_start": "2018-06-26",
            "period_end": "2018-07-25",
            "attemp_count": 0,
            "attemped": 1,
            "next_attemp_date": "2018-07-26",
            "due_date": "2018-06-29",
            "status": 0,
            "error": 0,
            "items": [],
            "payment": null,
            "outsidePayment": null,
            "paymentLink": "https://www.flow.cl/app/web/pay.php?token=7C7AA"
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.id, 1034);
        assert_eq!(invoice.amount, dec!(20000));
        assert_eq!(invoice.status, Some(0));
        assert!(invoice.payment.is_none());
    }
}
