//! Associated merchants (multi-merchant accounts).

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use serde::{Deserialize, Serialize};

/// Fields of an associated merchant, for create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantRequest {
    /// Merchant-chosen identifier.
    pub id: String,
    pub name: String,
    /// Merchant website.
    pub url: String,
}

impl MerchantRequest {
    fn to_params(&self) -> ParamSet {
        ParamSet::new()
            .with("id", &self.id)
            .with("name", &self.name)
            .with("url", &self.url)
    }
}

/// An associated merchant.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Merchant {
    #[serde(deserialize_with = "crate::de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "createdate", default)]
    pub created: Option<String>,
    /// 0 pending, 1 approved, 2 rejected.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(rename = "verifydate", default)]
    pub verified: Option<String>,
}

/// Merchant operations.
pub struct Merchants<'a> {
    client: &'a FlowClient,
}

impl<'a> Merchants<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// POST /merchant/create
    pub async fn create(&self, request: &MerchantRequest) -> Result<Merchant, FlowError> {
        tracing::info!(merchant_id = %request.id, "Creating merchant");
        self.client
            .dispatch(Operation::CreateMerchant, request.to_params())
            .await
    }

    /// POST /merchant/edit
    pub async fn edit(&self, request: &MerchantRequest) -> Result<Merchant, FlowError> {
        self.client
            .dispatch(Operation::EditMerchant, request.to_params())
            .await
    }

    /// POST /merchant/delete
    pub async fn delete(&self, merchant_id: &str) -> Result<Merchant, FlowError> {
        let params = ParamSet::new().with("id", merchant_id);
        self.client.dispatch(Operation::DeleteMerchant, params).await
    }

    /// GET /merchant/get
    pub async fn get(&self, merchant_id: &str) -> Result<Merchant, FlowError> {
        let params = ParamSet::new().with("id", merchant_id);
        self.client.dispatch(Operation::GetMerchant, params).await
    }

    /// GET /merchant/list
    pub async fn list(&self, query: &ListQuery) -> Result<PaginatedList<Merchant>, FlowError> {
        let mut params = ParamSet::new();
        query.apply(&mut params);
        self.client.dispatch(Operation::ListMerchants, params).await
    }
}
