//! Discount coupons.

use crate::client::FlowClient;
use crate::error::FlowError;
use crate::operation::Operation;
use crate::pagination::{ListQuery, PaginatedList};
use auth::ParamSet;
use common::DateInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a coupon takes off.
#[derive(Debug, Clone, PartialEq)]
pub enum CouponDiscount {
    /// Percentage of the amount, `0 < p <= 100`.
    Percent(Decimal),
    /// Fixed amount in `currency`.
    Amount { amount: Decimal, currency: String },
}

/// How long a coupon applies once attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponDuration {
    /// Every period, indefinitely.
    Forever,
    /// For this many periods.
    Repeating { times: u32 },
}

/// Parameters for `coupon/create`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCouponRequest {
    pub name: String,
    pub discount: CouponDiscount,
    pub duration: CouponDuration,
    /// Total redemptions allowed across customers.
    pub max_redemptions: Option<u32>,
    /// Last day the coupon can be redeemed.
    pub expires: Option<DateInput>,
}

impl CreateCouponRequest {
    fn to_params(&self) -> Result<ParamSet, FlowError> {
        let operation = Operation::CreateCoupon;
        let mut params = ParamSet::new().with("name", &self.name);

        match &self.discount {
            CouponDiscount::Percent(percent) => {
                if *percent <= Decimal::ZERO || *percent > Decimal::ONE_HUNDRED {
                    return Err(FlowError::InvalidRequest {
                        operation,
                        message: format!("percent_off must be in (0, 100], got {percent}"),
                    });
                }
                params.insert("percent_off", *percent);
            }
            CouponDiscount::Amount { amount, currency } => {
                params
                    .insert("amount", *amount)
                    .insert("currency", currency);
            }
        }

        match self.duration {
            CouponDuration::Forever => {
                params.insert("duration", 0u32);
            }
            CouponDuration::Repeating { times } => {
                params.insert("duration", 1u32).insert("times", times);
            }
        }

        params.insert_opt("max_redemptions", self.max_redemptions);

        if let Some(expires) = &self.expires {
            params.insert("expires", FlowClient::require_date(operation, expires.clone())?);
        }

        Ok(params)
    }
}

/// A coupon.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Coupon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub percent_off: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub created: Option<String>,
    /// 0 forever, 1 repeating.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub times: Option<i64>,
    #[serde(default)]
    pub max_redemptions: Option<i64>,
    #[serde(default)]
    pub expires: Option<String>,
    /// 1 active, 0 inactive.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub redemptions: Option<i64>,
}

/// Coupon operations.
pub struct Coupons<'a> {
    client: &'a FlowClient,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(client: &'a FlowClient) -> Self {
        Self { client }
    }

    /// POST /coupon/create
    pub async fn create(&self, request: &CreateCouponRequest) -> Result<Coupon, FlowError> {
        let params = request.to_params()?;
        self.client.dispatch(Operation::CreateCoupon, params).await
    }

    /// Rename a coupon; nothing else is editable.
    ///
    /// POST /coupon/edit
    pub async fn edit(&self, coupon_id: i64, name: &str) -> Result<Coupon, FlowError> {
        let params = ParamSet::new()
            .with("couponId", coupon_id)
            .with("name", name);
        self.client.dispatch(Operation::EditCoupon, params).await
    }

    /// POST /coupon/delete
    pub async fn delete(&self, coupon_id: i64) -> Result<Coupon, FlowError> {
        let params = ParamSet::new().with("couponId", coupon_id);
        self.client.dispatch(Operation::DeleteCoupon, params).await
    }

    /// GET /coupon/get
    pub async fn get(&self, coupon_id: i64) -> Result<Coupon, FlowError> {
        let params = ParamSet::new().with("couponId", coupon_id);
        self.client.dispatch(Operation::GetCoupon, params).await
    }

    /// GET /coupon/list
    pub async fn list(&self, query: &ListQuery) -> Result<PaginatedList<Coupon>, FlowError> {
        let mut params = ParamSet::new();
        query.apply(&mut params);
        self.client.dispatch(Operation::ListCoupons, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn request(discount: CouponDiscount) -> CreateCouponRequest {
        CreateCouponRequest {
            name: "WELCOME".into(),
            discount,
            duration: CouponDuration::Repeating { times: 3 },
            max_redemptions: None,
            expires: None,
        }
    }

    #[test]
    fn test_percent_coupon_params() {
        let params = request(CouponDiscount::Percent(dec!(12.5))).to_params().unwrap();

        assert_eq!(params.get("percent_off").unwrap().to_param_string(), "12.5");
        assert_eq!(params.get("duration").unwrap().to_param_string(), "1");
        assert_eq!(params.get("times").unwrap().to_param_string(), "3");
        assert!(!params.contains("amount"));
    }

    #[test]
    fn test_amount_coupon_forever() {
        let mut req = request(CouponDiscount::Amount {
            amount: dec!(2000),
            currency: "CLP".into(),
        });
        req.duration = CouponDuration::Forever;

        let params = req.to_params().unwrap();
        assert_eq!(params.get("currency").unwrap().to_param_string(), "CLP");
        assert_eq!(params.get("duration").unwrap().to_param_string(), "0");
        assert!(!params.contains("times"));
    }

    #[test]
    fn test_percent_out_of_range() {
        let err = request(CouponDiscount::Percent(dec!(150))).to_params().unwrap_err();
        assert!(matches!(err, FlowError::InvalidRequest { .. }));
    }

    #[test]
    fn test_expires_canonicalized() {
        let mut req = request(CouponDiscount::Percent(dec!(10)));
        req.expires = Some(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().into());

        let params = req.to_params().unwrap();
        assert_eq!(params.get("expires").unwrap().to_param_string(), "2025-01-31");
    }

    #[test]
    fn test_expires_invalid() {
        let mut req = request(CouponDiscount::Percent(dec!(10)));
        req.expires = Some("31/01/2025".into());

        let err = req.to_params().unwrap_err();
        assert!(matches!(
            err,
            FlowError::InvalidDate {
                operation: Operation::CreateCoupon,
                ..
            }
        ));
    }
}
