//! Extra line items billed with a subscription.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields of a subscription item, for create and edit.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionItemRequest {
    pub name: String,
    pub currency: String,
    /// May be negative for a standing discount.
    pub amount: Decimal,
}

impl SubscriptionItemRequest {
    fn apply(&self, params: &mut ParamSet) {
        params
            .insert("name", &self.name)
            .insert("currency", &self.currency)
            .insert("amount", self.amount);
    }
}

/// A subscription item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubscriptionItem {
    pub id: i64,
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,
    pub name: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub created: Option<String>,
}

/// Subscription item operations.
pub struct SubscriptionItems<'a> {
    client: &'a FlowClient,
}

impl<'a> SubscriptionItems<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// POST /subscription_item/create
    pub async fn create(
        &self,
        subscription_id: &str,
        item: &SubscriptionItemRequest,
    ) -> Result<SubscriptionItem, FlowError> {
        let mut params = ParamSet::new().with("subscriptionId", subscription_id);
        item.apply(&mut params);
        self.client
            .dispatch(Operation::CreateSubscriptionItem, params)
            .await
    }

    /// GET /subscription_item/get
    pub async fn get(&self, item_id: i64) -> Result<SubscriptionItem, FlowError> {
        let params = ParamSet::new().with("itemId", item_id);
        self.client
            .dispatch(Operation::GetSubscriptionItem, params)
            .await
    }

    /// POST /subscription_item/edit
    pub async fn edit(
        &self,
        item_id: i64,
        item: &SubscriptionItemRequest,
    ) -> Result<SubscriptionItem, FlowError> {
        let mut params = ParamSet::new().with("itemId", item_id);
        item.apply(&mut params);
        self.client
            .dispatch(Operation::EditSubscriptionItem, params)
            .await
    }

    /// POST /subscription_item/delete
    pub async fn delete(&self, item_id: i64) -> Result<SubscriptionItem, FlowError> {
        let params = ParamSet::new().with("itemId", item_id);
        self.client
            .dispatch(Operation::DeleteSubscriptionItem, params)
            .await
    }

    /// GET /subscription_item/list
    pub async fn list(
        &self,
        subscription_id: &str,
        query: &ListQuery,
    ) -> Result<PaginatedList<SubscriptionItem>, FlowError> {
        let mut params = ParamSet::new().with("subscriptionId", subscription_id);
        query.apply(&mut params);
        self.client
            .dispatch(Operation::ListSubscriptionItems, params)
            .await
    }
}
