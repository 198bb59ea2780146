//! Catalog of remote operations.
//!
//! Every call the client can make is one `Operation`. The variant fixes the
//! endpoint path, the HTTP verb and the name used in error messages, so the
//! dispatcher needs nothing else to route a call or label its failure.

use rest_client::HttpMethod;
use std::fmt;

/// A remote Flow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Payments
    CreatePayment,
    CreatePaymentByEmail,
    GetPaymentStatus,
    GetPaymentStatusByCommerceId,
    GetPaymentStatusByFlowOrder,
    ListPayments,

    // Refunds
    CreateRefund,
    CancelRefund,
    GetRefundStatus,

    // Plans
    CreatePlan,
    GetPlan,
    EditPlan,
    DeletePlan,
    ListPlans,

    // Coupons
    CreateCoupon,
    EditCoupon,
    DeleteCoupon,
    GetCoupon,
    ListCoupons,

    // Subscriptions
    CreateSubscription,
    GetSubscription,
    ListSubscriptions,
    ChangeSubscriptionTrial,
    CancelSubscription,
    AddSubscriptionCoupon,
    RemoveSubscriptionCoupon,

    // Subscription items
    CreateSubscriptionItem,
    GetSubscriptionItem,
    EditSubscriptionItem,
    DeleteSubscriptionItem,
    ListSubscriptionItems,

    // Invoices
    GetInvoice,
    CancelInvoice,
    RecordOutsidePayment,
    ListOverdueInvoices,
    RetryInvoiceCollection,

    // Merchants
    CreateMerchant,
    EditMerchant,
    DeleteMerchant,
    GetMerchant,
    ListMerchants,

    // Settlements
    GetSettlementsByDate,
    GetSettlement,
    SearchSettlements,
}

impl Operation {
    /// Path appended to the base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::CreatePayment => "/payment/create",
            Self::CreatePaymentByEmail => "/payment/createEmail",
            Self::GetPaymentStatus => "/payment/getStatus",
            Self::GetPaymentStatusByCommerceId => "/payment/getStatusByCommerceId",
            Self::GetPaymentStatusByFlowOrder => "/payment/getStatusByFlowOrder",
            Self::ListPayments => "/payment/getPayments",

            Self::CreateRefund => "/refund/create",
            Self::CancelRefund => "/refund/cancel",
            Self::GetRefundStatus => "/refund/getStatus",

            Self::CreatePlan => "/plans/create",
            Self::GetPlan => "/plans/get",
            Self::EditPlan => "/plans/edit",
            Self::DeletePlan => "/plans/delete",
            Self::ListPlans => "/plans/list",

            Self::CreateCoupon => "/coupon/create",
            Self::EditCoupon => "/coupon/edit",
            Self::DeleteCoupon => "/coupon/delete",
            Self::GetCoupon => "/coupon/get",
            Self::ListCoupons => "/coupon/list",

            Self::CreateSubscription => "/subscription/create",
            Self::GetSubscription => "/subscription/get",
            Self::ListSubscriptions => "/subscription/list",
            Self::ChangeSubscriptionTrial => "/subscription/changeTrial",
            Self::CancelSubscription => "/subscription/cancel",
            Self::AddSubscriptionCoupon => "/subscription/addCoupon",
            Self::RemoveSubscriptionCoupon => "/subscription/deleteCoupon",

            Self::CreateSubscriptionItem => "/subscription_item/create",
            Self::GetSubscriptionItem => "/subscription_item/get",
            Self::EditSubscriptionItem => "/subscription_item/edit",
            Self::DeleteSubscriptionItem => "/subscription_item/delete",
            Self::ListSubscriptionItems => "/subscription_item/list",

            Self::GetInvoice => "/invoice/get",
            Self::CancelInvoice => "/invoice/cancel",
            Self::RecordOutsidePayment => "/invoice/outsidePayment",
            Self::ListOverdueInvoices => "/invoice/getOverDue",
            Self::RetryInvoiceCollection => "/invoice/retryToCollect",

            Self::CreateMerchant => "/merchant/create",
            Self::EditMerchant => "/merchant/edit",
            Self::DeleteMerchant => "/merchant/delete",
            Self::GetMerchant => "/merchant/get",
            Self::ListMerchants => "/merchant/list",

            Self::GetSettlementsByDate => "/settlement/getByDate",
            Self::GetSettlement => "/settlement/getById",
            Self::SearchSettlements => "/settlement/search",
        }
    }

    /// Reads are GET, everything that changes remote state is POST.
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::GetPaymentStatus
            | Self::GetPaymentStatusByCommerceId
            | Self::GetPaymentStatusByFlowOrder
            | Self::ListPayments
            | Self::GetRefundStatus
            | Self::GetPlan
            | Self::ListPlans
            | Self::GetCoupon
            | Self::ListCoupons
            | Self::GetSubscription
            | Self::ListSubscriptions
            | Self::GetSubscriptionItem
            | Self::ListSubscriptionItems
            | Self::GetInvoice
            | Self::ListOverdueInvoices
            | Self::GetMerchant
            | Self::ListMerchants
            | Self::GetSettlementsByDate
            | Self::GetSettlement
            | Self::SearchSettlements => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Human-readable name used in errors and logs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CreatePayment => "create payment",
            Self::CreatePaymentByEmail => "create payment by email",
            Self::GetPaymentStatus => "get payment status",
            Self::GetPaymentStatusByCommerceId => "get payment status by commerce id",
            Self::GetPaymentStatusByFlowOrder => "get payment status by flow order",
            Self::ListPayments => "list payments",

            Self::CreateRefund => "create refund",
            Self::CancelRefund => "cancel refund",
            Self::GetRefundStatus => "get refund status",

            Self::CreatePlan => "create plan",
            Self::GetPlan => "get plan",
            Self::EditPlan => "edit plan",
            Self::DeletePlan => "delete plan",
            Self::ListPlans => "list plans",

            Self::CreateCoupon => "create coupon",
            Self::EditCoupon => "edit coupon",
            Self::DeleteCoupon => "delete coupon",
            Self::GetCoupon => "get coupon",
            Self::ListCoupons => "list coupons",

            Self::CreateSubscription => "create subscription",
            Self::GetSubscription => "get subscription",
            Self::ListSubscriptions => "list subscriptions",
            Self::ChangeSubscriptionTrial => "change subscription trial",
            Self::CancelSubscription => "cancel subscription",
            Self::AddSubscriptionCoupon => "add subscription coupon",
            Self::RemoveSubscriptionCoupon => "remove subscription coupon",

            Self::CreateSubscriptionItem => "create subscription item",
            Self::GetSubscriptionItem => "get subscription item",
            Self::EditSubscriptionItem => "edit subscription item",
            Self::DeleteSubscriptionItem => "delete subscription item",
            Self::ListSubscriptionItems => "list subscription items",

            Self::GetInvoice => "get invoice",
            Self::CancelInvoice => "cancel invoice",
            Self::RecordOutsidePayment => "record outside payment",
            Self::ListOverdueInvoices => "list overdue invoices",
            Self::RetryInvoiceCollection => "retry invoice collection",

            Self::CreateMerchant => "create merchant",
            Self::EditMerchant => "edit merchant",
            Self::DeleteMerchant => "delete merchant",
            Self::GetMerchant => "get merchant",
            Self::ListMerchants => "list merchants",

            Self::GetSettlementsByDate => "get settlements by date",
            Self::GetSettlement => "get settlement",
            Self::SearchSettlements => "search settlements",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_get() {
        assert_eq!(Operation::GetPaymentStatus.method(), HttpMethod::Get);
        assert_eq!(Operation::ListPlans.method(), HttpMethod::Get);
        assert_eq!(Operation::SearchSettlements.method(), HttpMethod::Get);
    }

    #[test]
    fn test_writes_are_post() {
        assert_eq!(Operation::CreatePayment.method(), HttpMethod::Post);
        assert_eq!(Operation::CancelSubscription.method(), HttpMethod::Post);
        assert_eq!(Operation::RecordOutsidePayment.method(), HttpMethod::Post);
        assert_eq!(Operation::DeleteMerchant.method(), HttpMethod::Post);
    }

    #[test]
    fn test_endpoints_under_resource_prefixes() {
        assert_eq!(Operation::CreatePayment.endpoint(), "/payment/create");
        assert_eq!(Operation::ListPlans.endpoint(), "/plans/list");
        assert_eq!(Operation::GetCoupon.endpoint(), "/coupon/get");
        assert_eq!(
            Operation::RemoveSubscriptionCoupon.endpoint(),
            "/subscription/deleteCoupon"
        );
        assert_eq!(Operation::ListOverdueInvoices.endpoint(), "/invoice/getOverDue");
        assert_eq!(Operation::GetSettlement.endpoint(), "/settlement/getById");
    }

    #[test]
    fn test_display_uses_description() {
        assert_eq!(Operation::CreateRefund.to_string(), "create refund");
    }
}
