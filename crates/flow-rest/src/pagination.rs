//! Paginated list envelope and shared list filters.
//!
//! List endpoints answer `{"total": n, "hasMore": 0|1, "data": "<json>"}`
//! where `data` is a JSON array encoded inside a string. The raw string is
//! kept as received and decoded on demand.

use auth::ParamSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound = "")]
pub struct PaginatedList<T> {
    /// Total number of records matching the query.
    pub total: i64,
    /// Whether more records follow this page.
    #[serde(rename = "hasMore", deserialize_with = "crate::de::flag")]
    pub has_more: bool,
    /// JSON-encoded array of records, exactly as sent by Flow.
    pub data: String,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> PaginatedList<T> {
    /// Decode the records in `data`.
    ///
    /// An empty `data` string decodes to no records.
    pub fn items(&self) -> Result<Vec<T>, serde_json::Error> {
        if self.data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.data)
    }
}

impl<T> PaginatedList<T> {
    /// Build a page by hand.
    pub fn new(total: i64, has_more: bool, data: impl Into<String>) -> Self {
        Self {
            total,
            has_more,
            data: data.into(),
            _marker: PhantomData,
        }
    }
}

/// Record status filter accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Inactive,
    Active,
}

impl RecordStatus {
    pub fn code(&self) -> i64 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }
}

/// Paging and filtering shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Offset of the first record (Flow default 0).
    pub start: Option<u32>,
    /// Page size (Flow default 10, max 100).
    pub limit: Option<u32>,
    /// Free-text filter on the record name.
    pub filter: Option<String>,
    /// Only records in this state.
    pub status: Option<RecordStatus>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Add the query's fields to a parameter set.
    pub(crate) fn apply(&self, params: &mut ParamSet) {
        params
            .insert_opt("start", self.start)
            .insert_opt("limit", self.limit)
            .insert_opt("filter", self.filter.as_deref())
            .insert_opt("status", self.status.map(|s| s.code()));
    }
}
