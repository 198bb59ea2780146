//! Resource wrappers.
//!
//! Each wrapper borrows the client and turns typed arguments into a
//! parameter set for one `Operation`; signing, transport and error
//! classification all happen in `FlowClient::dispatch`.

mod coupons;
mod invoices;
mod merchants;
mod payments;
mod plans;
mod refunds;
mod settlements;
mod subscription_items;
mod subscriptions;

pub use coupons::{Coupon, CouponDiscount, CouponDuration, Coupons, CreateCouponRequest};
pub use invoices::{Invoice, Invoices, OutsidePaymentRequest};
pub use merchants::{Merchant, MerchantRequest, Merchants};
pub use payments::{
    CreatePaymentRequest, PaymentCreated, PaymentData, PaymentListQuery, PaymentMethod,
    PaymentStatusResponse, Payments, PendingInfo,
};
pub use plans::{CreatePlanRequest, EditPlanRequest, Plan, PlanInterval, Plans};
pub use refunds::{CreateRefundRequest, Refund, Refunds};
pub use settlements::{Settlement, Settlements};
pub use subscription_items::{SubscriptionItem, SubscriptionItemRequest, SubscriptionItems};
pub use subscriptions::{CreateSubscriptionRequest, Subscription, Subscriptions};
