//! End-to-end dispatch tests against a local mock server.

use flow_rest::{
    CallOptions, ClientConfig, CreatePaymentRequest, CreateRefundRequest, FlowClient, FlowError,
    ListQuery, Operation, PaymentListQuery, PaymentStatus, RecordStatus, RestError,
};
use mockito::{Matcher, Server};
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

const API_KEY: &str = "test-api-key";

fn client(base_url: &str, secret: &str) -> FlowClient {
    FlowClient::new(API_KEY, secret, ClientConfig::with_base_url(base_url)).unwrap()
}

fn payment_request() -> CreatePaymentRequest {
    CreatePaymentRequest::new(
        "ORD-1",
        "Test",
        dec!(1000),
        "a@b.com",
        "https://y",
        "https://x",
    )
}

/// Accept connections and never answer them.
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_create_payment_posts_signed_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/payment/create")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), API_KEY.into()),
            Matcher::UrlEncoded("commerceOrder".into(), "ORD-1".into()),
            Matcher::UrlEncoded("amount".into(), "1000".into()),
            Matcher::UrlEncoded("urlReturn".into(), "https://x".into()),
            Matcher::UrlEncoded(
                "s".into(),
                "4531930b865164cabff47b3ef3d1493dc5f2b0333fbcdb74d415f51dc078e1ba".into(),
            ),
        ]))
        .with_status(200)
        .with_body(r#"{"url":"https://sandbox.flow.cl/app/web/pay.php","token":"tok-1","flowOrder":8765456}"#)
        .create_async()
        .await;

    let created = client(&server.url(), "shh")
        .payments()
        .create(&payment_request())
        .await
        .unwrap();

    assert_eq!(created.token, "tok-1");
    assert_eq!(created.flow_order, 8765456);
    assert_eq!(
        created.redirect_url(),
        "https://sandbox.flow.cl/app/web/pay.php?token=tok-1"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_status_signs_query_and_normalizes_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/payment/getStatus")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), API_KEY.into()),
            Matcher::UrlEncoded("token".into(), "tok-1".into()),
            Matcher::UrlEncoded(
                "s".into(),
                "dd07546cc0760376104cf8a3b0bebe688e0b63f9ea12d050db90bd9e3ee5f507".into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{"flowOrder":3567899,"commerceOrder":"ORD-1","requestDate":"2017-07-21 12:32:11",
                "status":2,"subject":"Test","currency":"CLP","amount":1000,"payer":"a@b.com"}"#,
        )
        .create_async()
        .await;

    let status = client(&server.url(), "secret")
        .payments()
        .get_status("tok-1")
        .await
        .unwrap();

    assert_eq!(status.status, PaymentStatus::Paid);
    assert_eq!(status.status.label(), "paid");
    assert_eq!(status.amount, dec!(1000));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_status_code_does_not_fail() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/payment/getStatusByFlowOrder")
        .match_query(Matcher::UrlEncoded("flowOrder".into(), "42".into()))
        .with_status(200)
        .with_body(r#"{"flowOrder":42,"commerceOrder":"ORD-9","status":7,"amount":"500"}"#)
        .create_async()
        .await;

    let status = client(&server.url(), "secret")
        .payments()
        .get_status_by_flow_order(42)
        .await
        .unwrap();

    assert_eq!(status.status, PaymentStatus::Unknown(7));
    assert_eq!(status.status.label(), "unknown");
}

#[tokio::test]
async fn test_http_500_with_error_body_is_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/payment/create")
        .with_status(500)
        .with_body(r#"{"code":500,"message":"Internal Server Error"}"#)
        .create_async()
        .await;

    let err = client(&server.url(), "shh")
        .payments()
        .create(&payment_request())
        .await
        .unwrap_err();

    match err {
        FlowError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(code, Some(500));
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_operation_error() {
    let err = client("http://127.0.0.1:1", "shh")
        .payments()
        .get_status("tok-1")
        .await
        .unwrap_err();

    match err {
        FlowError::Operation { operation, source } => {
            assert_eq!(operation, Operation::GetPaymentStatus);
            assert!(source.is_transport());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_per_call_timeout_surfaces_as_operation_error() {
    let base_url = silent_server().await;
    let client = client(&base_url, "shh")
        .with_call_options(CallOptions::new().with_timeout(Duration::from_millis(100)));

    let err = client.plans().get("gold").await.unwrap_err();

    assert!(err.is_timeout_or_cancelled());
    assert!(matches!(
        err,
        FlowError::Operation {
            operation: Operation::GetPlan,
            source: RestError::Timeout,
        }
    ));
}

#[tokio::test]
async fn test_cancelling_in_flight_call() {
    let base_url = silent_server().await;
    let (tx, rx) = watch::channel(false);
    let client = client(&base_url, "shh").with_call_options(CallOptions::new().with_cancel(rx));

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = tx.send(true);
    });

    let err = client.plans().list(&ListQuery::new()).await.unwrap_err();

    assert!(matches!(
        err,
        FlowError::Operation {
            operation: Operation::ListPlans,
            source: RestError::Cancelled,
        }
    ));
}

#[tokio::test]
async fn test_invalid_date_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/payment/getPayments")
        .with_status(200)
        .with_body(r#"{"total":0,"hasMore":0,"data":"[]"}"#)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server.url(), "shh")
        .payments()
        .list("15/03/2024", &PaymentListQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        FlowError::InvalidDate {
            operation: Operation::ListPayments,
            ..
        }
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_payment_list_keeps_data_as_string() {
    let mut server = Server::new_async().await;
    let data = r#"[{"flowOrder":1,"commerceOrder":"A","status":1,"amount":100}]"#;
    let body = serde_json::json!({"total": 1, "hasMore": 0, "data": data}).to_string();
    let mock = server
        .mock("GET", "/payment/getPayments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("date".into(), "2024-03-15".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let query = PaymentListQuery {
        start: None,
        limit: Some(5),
    };
    let page = client(&server.url(), "shh")
        .payments()
        .list("2024-03-15T10:00:00Z", &query)
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert!(!page.has_more);
    assert_eq!(page.data, data);

    let items = page.items().unwrap();
    assert_eq!(items[0].status, PaymentStatus::Pending);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refund_without_transaction_id_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/refund/create")
        .expect(0)
        .create_async()
        .await;

    let request = CreateRefundRequest {
        refund_commerce_order: "R-1".into(),
        receiver_email: "a@b.com".into(),
        amount: dec!(100),
        url_callback: "https://cb".into(),
        commerce_trx_id: None,
        flow_trx_id: None,
    };
    let err = client(&server.url(), "shh")
        .refunds()
        .create(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::InvalidRequest { .. }));
    mock.assert_async().await;
}

#[derive(Debug, Deserialize)]
struct Row {
    id: String,
}

#[tokio::test]
async fn test_subscription_list_by_plan() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/subscription/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("planId".into(), "gold".into()),
            Matcher::UrlEncoded("status".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"total":1,"hasMore":1,"data":"[{\"id\":\"sus_1\"}]"}"#)
        .create_async()
        .await;

    let page = client(&server.url(), "shh")
        .subscriptions()
        .list("gold", &ListQuery::new().status(RecordStatus::Active))
        .await
        .unwrap();

    assert!(page.has_more);
    let rows: Vec<Row> = serde_json::from_str(&page.data).unwrap();
    assert_eq!(rows[0].id, "sus_1");
}
