mod common;

use axum::http::{Method, StatusCode};
use common::{get_json, post_json, send, test_app};
use payments_lifecycle::domain::payment::{PaymentStatus, Payments};
use payments_lifecycle::interfaces::http::error_responses::ErrorResponse;
use payments_lifecycle::interfaces::http::payments::{StatusResponse, UpdateResponse};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_register_and_pay_paypal() {
    let app = test_app();

    let (status, body): (_, StatusResponse) =
        post_json(&app, "/payments/p1?amount=100&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Payment registered");
    assert_eq!(body.payment_id, "p1");
    assert_eq!(body.status, PaymentStatus::Registered);

    let (status, body): (_, StatusResponse) = post_json(&app, "/payments/p1/pay").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Payment successful");
    assert_eq!(body.status, PaymentStatus::Paid);
}

#[tokio::test]
async fn test_pay_over_limit_fails_validation() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/p1?amount=6000&payment_method=PayPal").await;

    let (status, body): (_, StatusResponse) = post_json(&app, "/payments/p1/pay").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Payment failed validation");
    assert_eq!(body.status, PaymentStatus::Failed);
}

#[tokio::test]
async fn test_list_payments_keyed_by_id() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/a?amount=10.5&payment_method=PayPal").await;
    post_json::<StatusResponse>(&app, "/payments/b?amount=20&payment_method=Credit%20Card")
        .await;

    let (status, payments): (_, Payments) = get_json(&app, "/payments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payments.len(), 2);
    assert_eq!(payments["a"].amount.value(), dec!(10.5));
    assert_eq!(payments["b"].payment_method, "Credit Card");
    assert_eq!(payments["b"].status, PaymentStatus::Registered);

    let (_, raw): (_, serde_json::Value) = get_json(&app, "/payments").await;
    assert_eq!(raw["a"]["amount"], serde_json::json!(10.5));
    assert_eq!(raw["a"]["status"], "REGISTERED");
}

#[tokio::test]
async fn test_duplicate_register_is_bad_request() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/p1?amount=1&payment_method=PayPal").await;

    let (status, body): (_, ErrorResponse) =
        post_json(&app, "/payments/p1?amount=1&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, 400);
    assert_eq!(body.message, "Payment ID p1 already exists");
}

#[tokio::test]
async fn test_update_registered_payment() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/p1?amount=1&payment_method=PayPal").await;

    let (status, body): (_, UpdateResponse) = post_json(
        &app,
        "/payments/p1/update?amount=750&payment_method=Tarjeta%20de%20Cr%C3%A9dito",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Payment updated");
    assert_eq!(body.data.amount.value(), dec!(750));
    assert_eq!(body.data.payment_method, "Tarjeta de Crédito");
    assert_eq!(body.data.status, PaymentStatus::Registered);
}

#[tokio::test]
async fn test_update_after_pay_is_bad_request() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/p1?amount=1&payment_method=PayPal").await;
    post_json::<StatusResponse>(&app, "/payments/p1/pay").await;

    let (status, body): (_, ErrorResponse) =
        post_json(&app, "/payments/p1/update?amount=2&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "Cannot update payment in status PAID");
}

#[tokio::test]
async fn test_revert_flow() {
    let app = test_app();
    post_json::<StatusResponse>(&app, "/payments/p1?amount=1&payment_method=Cash").await;

    let (status, body): (_, ErrorResponse) = post_json(&app, "/payments/p1/revert").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "Cannot revert payment in status REGISTERED");

    let (_, paid): (_, StatusResponse) = post_json(&app, "/payments/p1/pay").await;
    assert_eq!(paid.status, PaymentStatus::Failed);

    let (status, body): (_, StatusResponse) = post_json(&app, "/payments/p1/revert").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.status, PaymentStatus::Registered);
    assert_eq!(body.message, "Payment reverted to REGISTERED");
}

#[tokio::test]
async fn test_unknown_payment_is_not_found() {
    let app = test_app();

    for uri in [
        "/payments/ghost/pay",
        "/payments/ghost/revert",
        "/payments/ghost/update?amount=1&payment_method=PayPal",
    ] {
        let (status, body): (_, ErrorResponse) = post_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body.message, "Payment ghost not found");
    }
}

#[tokio::test]
async fn test_negative_amount_is_bad_request() {
    let app = test_app();
    let (status, body): (_, ErrorResponse) =
        post_json(&app, "/payments/p1?amount=-1&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "Validation error: Amount must not be negative");

    let (_, payments): (_, Payments) = get_json(&app, "/payments").await;
    assert!(payments.is_empty());
}

#[tokio::test]
async fn test_missing_query_parameters_rejected() {
    let app = test_app();
    let (status, _) = send(&app, Method::POST, "/payments/p1?amount=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/payments/p1?amount=abc&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check_and_fallback() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health-check").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");

    let (status, body): (_, ErrorResponse) = get_json(&app, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, 404);
}

#[tokio::test]
async fn test_amount_outside_decimal_range_rejected() {
    let app = test_app();
    let (status, _) = send(&app, Method::POST, "/payments/p1?amount=1e30&payment_method=PayPal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, payments): (_, Payments) = get_json(&app, "/payments").await;
    assert!(payments.is_empty());
}
