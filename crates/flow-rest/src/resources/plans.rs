//! Subscription plans.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PlanInterval {
    pub fn code(&self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 2,
            Self::Monthly => 3,
            Self::Yearly => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Daily),
            2 => Some(Self::Weekly),
            3 => Some(Self::Monthly),
            4 => Some(Self::Yearly),
            _ => None,
        }
    }
}

/// Parameters for `plans/create`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlanRequest {
    /// Merchant-chosen plan identifier.
    pub plan_id: String,
    pub name: String,
    pub amount: Decimal,
    pub interval: PlanInterval,
    pub currency: Option<String>,
    /// Bill every `interval_count` intervals (default 1).
    pub interval_count: Option<u32>,
    pub trial_period_days: Option<u32>,
    /// Days the customer has to pay each invoice.
    pub days_until_due: Option<u32>,
    /// Number of billing periods; unlimited when unset.
    pub periods_number: Option<u32>,
    /// Where Flow reports each charge.
    pub url_callback: Option<String>,
    pub charges_retries_number: Option<u32>,
    pub currency_convert_option: Option<u32>,
}

impl CreatePlanRequest {
    pub fn new(
        plan_id: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        interval: PlanInterval,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            name: name.into(),
            amount,
            interval,
            currency: None,
            interval_count: None,
            trial_period_days: None,
            days_until_due: None,
            periods_number: None,
            url_callback: None,
            charges_retries_number: None,
            currency_convert_option: None,
        }
    }

    fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params
            .insert("planId", &self.plan_id)
            .insert("name", &self.name)
            .insert("amount", self.amount)
            .insert("interval", self.interval.code())
            .insert_opt("currency", self.currency.as_deref())
            .insert_opt("interval_count", self.interval_count)
            .insert_opt("trial_period_days", self.trial_period_days)
            .insert_opt("days_until_due", self.days_until_due)
            .insert_opt("periods_number", self.periods_number)
            .insert_opt("urlCallback", self.url_callback.as_deref())
            .insert_opt("charges_retries_number", self.charges_retries_number)
            .insert_opt("currency_convert_option", self.currency_convert_option);
        params
    }
}

/// Parameters for `plans/edit`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPlanRequest {
    pub plan_id: String,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<Decimal>,
    pub interval: Option<PlanInterval>,
    pub interval_count: Option<u32>,
    pub trial_period_days: Option<u32>,
    pub days_until_due: Option<u32>,
    pub periods_number: Option<u32>,
    pub url_callback: Option<String>,
    pub charges_retries_number: Option<u32>,
    pub currency_convert_option: Option<u32>,
}

impl EditPlanRequest {
    fn to_params(&self) -> ParamSet {
        let mut params = ParamSet::new();
        params
            .insert("planId", &self.plan_id)
            .insert_opt("name", self.name.as_deref())
            .insert_opt("currency", self.currency.as_deref())
            .insert_opt("amount", self.amount)
            .insert_opt("interval", self.interval.map(|i| i.code()))
            .insert_opt("interval_count", self.interval_count)
            .insert_opt("trial_period_days", self.trial_period_days)
            .insert_opt("days_until_due", self.days_until_due)
            .insert_opt("periods_number", self.periods_number)
            .insert_opt("urlCallback", self.url_callback.as_deref())
            .insert_opt("charges_retries_number", self.charges_retries_number)
            .insert_opt("currency_convert_option", self.currency_convert_option);
        params
    }
}

/// A subscription plan.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Plan {
    #[serde(rename = "planId")]
    pub plan_id: String,
    pub name: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub amount: Decimal,
    /// Raw interval code; see `PlanInterval::from_code`.
    pub interval: i64,
    #[serde(default)]
    pub interval_count: Option<i64>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub trial_period_days: Option<i64>,
    #[serde(default)]
    pub days_until_due: Option<i64>,
    #[serde(default)]
    pub periods_number: Option<i64>,
    #[serde(rename = "urlCallback", default)]
    pub url_callback: Option<String>,
    #[serde(default)]
    pub charges_retries_number: Option<i64>,
    #[serde(default)]
    pub currency_convert_option: Option<i64>,
    /// 1 active, 0 deleted.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub public: Option<i64>,
}

impl Plan {
    pub fn interval(&self) -> Option<PlanInterval> {
        PlanInterval::from_code(self.interval)
    }
}

/// Plan operations.
pub struct Plans<'a> {
    client: &'a FlowClient,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// POST /plans/create
    pub async fn create(&self, request: &CreatePlanRequest) -> Result<Plan, FlowError> {
        tracing::info!(plan_id = %request.plan_id, "Creating plan");
        self.client
            .dispatch(Operation::CreatePlan, request.to_params())
            .await
    }

    /// GET /plans/get
    pub async fn get(&self, plan_id: &str) -> Result<Plan, FlowError> {
        let params = ParamSet::new().with("planId", plan_id);
        self.client.dispatch(Operation::GetPlan, params).await
    }

    /// POST /plans/edit
    pub async fn edit(&self, request: &EditPlanRequest) -> Result<Plan, FlowError> {
        self.client
            .dispatch(Operation::EditPlan, request.to_params())
            .await
    }

    /// POST /plans/delete
    pub async fn delete(&self, plan_id: &str) -> Result<Plan, FlowError> {
        let params = ParamSet::new().with("planId", plan_id);
        self.client.dispatch(Operation::DeletePlan, params).await
    }

    /// GET /plans/list
    pub async fn list(&self, query: &ListQuery) -> Result<PaginatedList<Plan>, FlowError> {
        let mut params = ParamSet::new();
        query.apply(&mut params);
        self.client.dispatch(Operation::ListPlans, params).await
    }
}
