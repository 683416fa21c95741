//! Integration tests for the Razorpay orders client against a mocked API.

use gateway_core::{CreateOrderParams, Currency, OrderStatus, PaymentError, PaymentProvider};
use gateway_razorpay::{RazorpayConfig, RazorpayProvider};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> RazorpayProvider {
    let config = RazorpayConfig::new("rzp_test_abc123", "test_secret_key")
        .with_api_base_url(server.uri());
    RazorpayProvider::new(config)
}

#[tokio::test]
async fn create_order_sends_paise_and_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(basic_auth("rzp_test_abc123", "test_secret_key"))
        .and(body_partial_json(json!({
            "amount": 50_000,
            "currency": "INR",
            "payment_capture": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_MkQhgfkEkRnCxV",
            "entity": "order",
            "amount": 50_000,
            "amount_paid": 0,
            "amount_due": 50_000,
            "currency": "INR",
            "receipt": null,
            "status": "created",
            "attempts": 0,
            "created_at": 1_700_000_000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let amount = Currency::INR.to_minor_units(500).unwrap();
    let order = provider
        .create_order(&CreateOrderParams::new(amount, Currency::INR))
        .await
        .unwrap();

    assert_eq!(order.id, "order_MkQhgfkEkRnCxV");
    assert_eq!(order.amount, 50_000);
    assert_eq!(order.currency, Currency::INR);
    assert_eq!(order.status, OrderStatus::Created);
    assert_eq!(order.created_at.unwrap().timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn create_order_forwards_receipt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(body_partial_json(json!({ "receipt": "rcpt_42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_xyz",
            "amount": 100,
            "currency": "INR",
            "receipt": "rcpt_42",
            "status": "created",
            "created_at": 1_700_000_000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let order = provider
        .create_order(&CreateOrderParams::new(100, Currency::INR).with_receipt("rcpt_42"))
        .await
        .unwrap();

    assert_eq!(order.receipt.as_deref(), Some("rcpt_42"));
}

#[tokio::test]
async fn provider_rejection_becomes_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "Order amount less than minimum amount allowed"
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .create_order(&CreateOrderParams::new(1, Currency::INR))
        .await;

    match result {
        Err(PaymentError::ProviderError { code, description }) => {
            assert_eq!(code, "BAD_REQUEST_ERROR");
            assert_eq!(description, "Order amount less than minimum amount allowed");
        }
        other => panic!("expected ProviderError, got {:?}", other),
    }
}

#[tokio::test]
async fn auth_failure_becomes_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "Authentication failed"
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .create_order(&CreateOrderParams::new(100, Currency::INR))
        .await;

    assert!(matches!(
        result,
        Err(PaymentError::ProviderError { .. })
    ));
}

#[tokio::test]
async fn unreachable_provider_becomes_network_error() {
    // Nothing listening on this port
    let config = RazorpayConfig::new("rzp_test_abc123", "test_secret_key")
        .with_api_base_url("http://127.0.0.1:1");
    let provider = RazorpayProvider::new(config);

    let result = provider
        .create_order(&CreateOrderParams::new(100, Currency::INR))
        .await;

    assert!(matches!(result, Err(PaymentError::NetworkError(_))));
}
