//! Payment orders.
//!
//! Creating a payment returns a URL and token; the payer is redirected to
//! `url?token=...` and Flow later reports the outcome, which is read back
//! with one of the status calls.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::PaginatedList;
use crate::status::PaymentStatus;
use auth::ParamSet;
use common::DateInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment rail selection.
///
/// Setting a method sends the payer straight to that rail and skips Flow's
/// selection page; leaving it unset shows the selection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Webpay (cards).
    Webpay,
    /// Servipag.
    Servipag,
    /// Multicaja.
    Multicaja,
    /// Every method enabled for the merchant.
    All,
    /// A method code not listed above.
    Other(u32),
}

impl PaymentMethod {
    pub fn code(&self) -> u32 {
        match self {
            Self::Webpay => 1,
            Self::Servipag => 2,
            Self::Multicaja => 3,
            Self::All => 9,
            Self::Other(code) => *code,
        }
    }
}

/// Parameters for `payment/create` and `payment/createEmail`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentRequest {
    /// Merchant-side order identifier; must be unique per merchant.
    pub commerce_order: String,
    /// Description shown to the payer.
    pub subject: String,
    /// Amount in `currency`.
    pub amount: Decimal,
    /// Payer email.
    pub email: String,
    /// Where Flow POSTs the payment token once the outcome is known.
    pub url_confirmation: String,
    /// Where the payer's browser is sent afterwards.
    pub url_return: String,
    /// ISO currency; Flow assumes CLP when unset.
    pub currency: Option<String>,
    /// Skip the selection page and go straight to one rail.
    pub payment_method: Option<PaymentMethod>,
    /// Free-form merchant data, echoed back in status responses.
    pub optional: Option<Value>,
    /// Seconds until the order expires.
    pub timeout: Option<u32>,
    /// Associated merchant, for multi-merchant accounts.
    pub merchant_id: Option<String>,
    /// Currency the payer is charged in.
    pub payment_currency: Option<String>,
    /// `createEmail` only: days after which a reminder is sent.
    pub forward_days_after: Option<u32>,
    /// `createEmail` only: how many reminders are sent.
    pub forward_times: Option<u32>,
}

impl CreatePaymentRequest {
    /// A request with every optional field unset.
    pub fn new(
        commerce_order: impl Into<String>,
        subject: impl Into<String>,
        amount: Decimal,
        email: impl Into<String>,
        url_confirmation: impl Into<String>,
        url_return: impl Into<String>,
    ) -> Self {
        Self {
            commerce_order: commerce_order.into(),
            subject: subject.into(),
            amount,
            email: email.into(),
            url_confirmation: url_confirmation.into(),
            url_return: url_return.into(),
            currency: None,
            payment_method: None,
            optional: None,
            timeout: None,
            merchant_id: None,
            payment_currency: None,
            forward_days_after: None,
            forward_times: None,
        }
    }

    fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params
            .insert("commerceOrder", &self.commerce_order)
            .insert("subject", &self.subject)
            .insert("amount", self.amount)
            .insert("email", &self.email)
            .insert("urlConfirmation", &self.url_confirmation)
            .insert("urlReturn", &self.url_return)
            .insert_opt("currency", self.currency.as_deref())
            .insert_opt("paymentMethod", self.payment_method.map(|m| m.code()))
            .insert_opt("timeout", self.timeout)
            .insert_opt("merchantId", self.merchant_id.as_deref())
            .insert_opt("payment_currency", self.payment_currency.as_deref());
        if let Some(optional) = &self.optional {
            params.insert_json("optional", optional.clone());
        }
        params
    }

    fn validate(&self, operation: Operation) -> Result<(), FlowError> {
        if self.amount <= Decimal::ZERO {
            return Err(FlowError::InvalidRequest {
                operation,
                message: format!("amount must be positive, got {}", self.amount),
            });
        }
        if self.commerce_order.is_empty() {
            return Err(FlowError::InvalidRequest {
                operation,
                message: "commerce order must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Response from `payment/create` and `payment/createEmail`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentCreated {
    pub url: String,
    pub token: String,
    #[serde(rename = "flowOrder")]
    pub flow_order: i64,
}

impl PaymentCreated {
    /// URL the payer must be redirected to.
    pub fn redirect_url(&self) -> String {
        format!("{}?token={}", self.url, self.token)
    }
}

/// Pending-payment details (e.g. cash payment coupons).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PendingInfo {
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Settlement details of a paid order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentData {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(rename = "conversionDate", default)]
    pub conversion_date: Option<String>,
    #[serde(rename = "conversionRate", default)]
    pub conversion_rate: Option<Decimal>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(rename = "transferDate", default)]
    pub transfer_date: Option<String>,
}

/// Response from the `payment/getStatus*` family.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentStatusResponse {
    #[serde(rename = "flowOrder")]
    pub flow_order: i64,
    #[serde(rename = "commerceOrder")]
    pub commerce_order: String,
    #[serde(rename = "requestDate", default)]
    pub request_date: Option<String>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub optional: Option<Value>,
    #[serde(default)]
    pub pending_info: Option<PendingInfo>,
    #[serde(rename = "paymentData", default)]
    pub payment_data: Option<PaymentData>,
    #[serde(rename = "merchantId", default)]
    pub merchant_id: Option<String>,
}

/// Paging for `payment/getPayments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentListQuery {
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

/// Payment operations.
pub struct Payments<'a> {
    client: &'a FlowClient,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// Create a payment order.
    ///
    /// POST /payment/create
    pub async fn create(&self, request: &CreatePaymentRequest) -> Result<PaymentCreated, FlowError> {
        self.create_with(Operation::CreatePayment, request.to_params(), request)
            .await
    }

    /// Create a payment order and have Flow email the payment link.
    ///
    /// POST /payment/createEmail
    pub async fn create_by_email(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentCreated, FlowError> {
        let mut params = request.to_params();
        params
            .insert_opt("forward_days_after", request.forward_days_after)
            .insert_opt("forward_times", request.forward_times);

        self.create_with(Operation::CreatePaymentByEmail, params, request)
            .await
    }

    async fn create_with(
        &self,
        operation: Operation,
        params: ParamSet,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentCreated, FlowError> {
        request.validate(operation)?;

        tracing::info!(
            commerce_order = %request.commerce_order,
            amount = %request.amount,
            operation = %operation,
            "Creating payment"
        );

        let response: PaymentCreated = self.client.dispatch(operation, params).await?;

        tracing::info!(
            flow_order = response.flow_order,
            commerce_order = %request.commerce_order,
            "Payment created"
        );

        Ok(response)
    }

    /// Get the status of a payment by its token.
    ///
    /// GET /payment/getStatus
    pub async fn get_status(&self, token: &str) -> Result<PaymentStatusResponse, FlowError> {
        let params = ParamSet::new().with("token", token);
        self.client.dispatch(Operation::GetPaymentStatus, params).await
    }

    /// Get the status of a payment by the merchant's order identifier.
    ///
    /// GET /payment/getStatusByCommerceId
    pub async fn get_status_by_commerce_id(
        &self,
        commerce_id: &str,
    ) -> Result<PaymentStatusResponse, FlowError> {
        let params = ParamSet::new().with("commerceId", commerce_id);
        self.client
            .dispatch(Operation::GetPaymentStatusByCommerceId, params)
            .await
    }

    /// Get the status of a payment by Flow's order number.
    ///
    /// GET /payment/getStatusByFlowOrder
    pub async fn get_status_by_flow_order(
        &self,
        flow_order: i64,
    ) -> Result<PaymentStatusResponse, FlowError> {
        let params = ParamSet::new().with("flowOrder", flow_order);
        self.client
            .dispatch(Operation::GetPaymentStatusByFlowOrder, params)
            .await
    }

    /// List payments received on a given day.
    ///
    /// GET /payment/getPayments
    ///
    /// The date is canonicalized first; an unreadable date fails with
    /// `FlowError::InvalidDate` and no request is sent.
    pub async fn list(
        &self,
        date: impl Into<DateInput>,
        query: &PaymentListQuery,
    ) -> Result<PaginatedList<PaymentStatusResponse>, FlowError> {
        let date = FlowClient::require_date(Operation::ListPayments, date)?;

        let mut params = ParamSet::new().with("date", date);
        params
            .insert_opt("start", query.start)
            .insert_opt("limit", query.limit);

        self.client.dispatch(Operation::ListPayments, params).await
    }
}
