//! Customer subscriptions to plans.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use common::DateInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for `subscription/create`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSubscriptionRequest {
    pub plan_id: String,
    pub customer_id: String,
    /// First billing day; today when unset.
    pub subscription_start: Option<DateInput>,
    pub coupon_id: Option<i64>,
    /// Overrides the plan's trial length.
    pub trial_period_days: Option<u32>,
    /// Overrides the plan's number of periods.
    pub periods_number: Option<u32>,
}

impl CreateSubscriptionRequest {
    pub fn new(plan_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            customer_id: customer_id.into(),
            subscription_start: None,
            coupon_id: None,
            trial_period_days: None,
            periods_number: None,
        }
    }

    fn to_params(&self) -> Result<ParamSet, FlowError> {
        let mut params = ParamSet::new()
            .with("planId", &self.plan_id)
            .with("customerId", &self.customer_id);
        params
            .insert_opt("couponId", self.coupon_id)
            .insert_opt("trial_period_days", self.trial_period_days)
            .insert_opt("periods_number", self.periods_number);

        if let Some(start) = &self.subscription_start {
            let start = FlowClient::require_date(Operation::CreateSubscription, start.clone())?;
            params.insert("subscription_start", start);
        }

        Ok(params)
    }
}

/// A subscription.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subscription {
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub subscription_start: Option<String>,
    #[serde(default)]
    pub subscription_end: Option<String>,
    #[serde(default)]
    pub period_start: Option<String>,
    #[serde(default)]
    pub period_end: Option<String>,
    #[serde(default)]
    pub next_invoice_date: Option<String>,
    #[serde(default)]
    pub trial_period_days: Option<i64>,
    #[serde(default)]
    pub trial_start: Option<String>,
    #[serde(default)]
    pub trial_end: Option<String>,
    /// 1 when the subscription ends at the close of the current period.
    #[serde(default)]
    pub cancel_at_period_end: Option<i64>,
    #[serde(default)]
    pub cancel_at: Option<String>,
    #[serde(default)]
    pub periods_number: Option<i64>,
    #[serde(default)]
    pub days_until_due: Option<i64>,
    /// 1 active, 2 in trial, 4 cancelled.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub discount: Option<Value>,
    #[serde(default)]
    pub invoices: Option<Vec<Value>>,
}

/// Subscription operations.
pub struct Subscriptions<'a> {
    client: &'a FlowClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// POST /subscription/create
    pub async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription, FlowError> {
        let params = request.to_params()?;

        tracing::info!(
            plan_id = %request.plan_id,
            customer_id = %request.customer_id,
            "Creating subscription"
        );

        self.client
            .dispatch(Operation::CreateSubscription, params)
            .await
    }

    /// GET /subscription/get
    pub async fn get(&self, subscription_id: &str) -> Result<Subscription, FlowError> {
        let params = ParamSet::new().with("subscriptionId", subscription_id);
        self.client.dispatch(Operation::GetSubscription, params).await
    }

    /// List the subscriptions of one plan.
    ///
    /// GET /subscription/list
    pub async fn list(
        &self,
        plan_id: &str,
        query: &ListQuery,
    ) -> Result<PaginatedList<Subscription>, FlowError> {
        let mut params = ParamSet::new().with("planId", plan_id);
        query.apply(&mut params);
        self.client
            .dispatch(Operation::ListSubscriptions, params)
            .await
    }

    /// Change the trial length of a subscription still in trial.
    ///
    /// POST /subscription/changeTrial
    pub async fn change_trial(
        &self,
        subscription_id: &str,
        trial_period_days: u32,
    ) -> Result<Subscription, FlowError> {
        let params = ParamSet::new()
            .with("subscriptionId", subscription_id)
            .with("trial_period_days", trial_period_days);
        self.client
            .dispatch(Operation::ChangeSubscriptionTrial, params)
            .await
    }

    /// Cancel now, or at the end of the current period.
    ///
    /// POST /subscription/cancel
    pub async fn cancel(
        &self,
        subscription_id: &str,
        at_period_end: bool,
    ) -> Result<Subscription, FlowError> {
        let params = ParamSet::new()
            .with("subscriptionId", subscription_id)
            .with("at_period_end", u32::from(at_period_end));

        tracing::info!(
            subscription_id = %subscription_id,
            at_period_end = at_period_end,
            "Cancelling subscription"
        );

        self.client
            .dispatch(Operation::CancelSubscription, params)
            .await
    }

    /// POST /subscription/addCoupon
    pub async fn add_coupon(
        &self,
        subscription_id: &str,
        coupon_id: i64,
    ) -> Result<Subscription, FlowError> {
        let params = ParamSet::new()
            .with("subscriptionId", subscription_id)
            .with("couponId", coupon_id);
        self.client
            .dispatch(Operation::AddSubscriptionCoupon, params)
            .await
    }

    /// POST /subscription/deleteCoupon
    pub async fn remove_coupon(&self, subscription_id: &str) -> Result<Subscription, FlowError> {
        let params = ParamSet::new().with("subscriptionId", subscription_id);
        self.client
            .dispatch(Operation::RemoveSubscriptionCoupon, params)
            .await
    }
}
