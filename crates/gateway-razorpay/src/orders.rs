//! # Razorpay Orders API
//!
//! Implementation of the Razorpay Orders API (`POST /v1/orders`).
//! This is the only provider call the facade makes.

use crate::config::RazorpayConfig;
use crate::signature;
use async_trait::async_trait;
use chrono::DateTime;
use gateway_core::{
    CreateOrderParams, Order, OrderStatus, PaymentError, PaymentProvider, PaymentResult,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// How long to wait on the provider before giving up. The reference client
/// had no timeout at all and could hang a request indefinitely.
const PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Razorpay payment provider
///
/// Authenticates with HTTP basic auth (`key_id:key_secret`) and creates
/// auto-capture orders. Signature verification reuses the same key secret.
pub struct RazorpayProvider {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayProvider {
    /// Create a new Razorpay provider
    pub fn new(config: RazorpayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Ok(Self::new(config))
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.config.api_base_url)
    }
}

#[async_trait]
impl PaymentProvider for RazorpayProvider {
    #[instrument(skip(self, params), fields(amount = params.amount, currency = %params.currency))]
    async fn create_order(&self, params: &CreateOrderParams) -> PaymentResult<Order> {
        if params.amount <= 0 {
            return Err(PaymentError::InvalidInput(
                "Order amount must be positive".to_string(),
            ));
        }

        let request = RazorpayOrderRequest {
            amount: params.amount,
            currency: params.currency.as_str(),
            // 1 = capture the payment automatically once authorized
            payment_capture: 1,
            receipt: params.receipt.as_deref(),
        };

        debug!("Creating Razorpay order: {} {}", params.amount, params.currency);

        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&request)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            // Parse the Razorpay error envelope
            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    code: error_response.error.code,
                    description: error_response.error.description,
                });
            }

            return Err(PaymentError::ProviderError {
                code: status.as_u16().to_string(),
                description: body,
            });
        }

        let order_response: RazorpayOrderResponse = serde_json::from_str(&body)
            .map_err(|e| PaymentError::Serialization(format!("Failed to parse Razorpay response: {}", e)))?;

        info!(
            "Created Razorpay order: id={}, amount={}, status={}",
            order_response.id, order_response.amount, order_response.status
        );

        Ok(Order {
            id: order_response.id,
            amount: order_response.amount,
            currency: params.currency,
            status: order_response.status,
            receipt: order_response.receipt,
            created_at: order_response
                .created_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> PaymentResult<()> {
        signature::verify_payment_signature(&self.config.key_secret, order_id, payment_id, signature)
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    payment_capture: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    amount: i64,
    status: OrderStatus,
    #[serde(default)]
    receipt: Option<String>,
    #[serde(default)]
    created_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    code: String,
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_core::Currency;

    #[test]
    fn test_order_request_body() {
        let request = RazorpayOrderRequest {
            amount: 50_000,
            currency: Currency::INR.as_str(),
            payment_capture: 1,
            receipt: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], 50_000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["payment_capture"], 1);
        assert!(json.get("receipt").is_none());
    }

    #[test]
    fn test_parse_order_response() {
        let body = r#"{
            "id": "order_MkQhgfkEkRnCxV",
            "entity": "order",
            "amount": 50000,
            "amount_paid": 0,
            "amount_due": 50000,
            "currency": "INR",
            "receipt": "rcpt_42",
            "status": "created",
            "attempts": 0,
            "created_at": 1700000000
        }"#;

        let response: RazorpayOrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id, "order_MkQhgfkEkRnCxV");
        assert_eq!(response.amount, 50_000);
        assert_eq!(response.status, OrderStatus::Created);
        assert_eq!(response.receipt.as_deref(), Some("rcpt_42"));
        assert_eq!(response.created_at, Some(1_700_000_000));
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "Order amount less than minimum amount allowed",
                "source": "business",
                "step": "payment_initiation",
                "reason": "input_validation_failed"
            }
        }"#;

        let response: RazorpayErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error.code, "BAD_REQUEST_ERROR");
        assert_eq!(
            response.error.description,
            "Order amount less than minimum amount allowed"
        );
    }

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let provider = RazorpayProvider::new(RazorpayConfig::new("rzp_test_x", "secret"));

        let result = provider
            .create_order(&CreateOrderParams::new(0, Currency::INR))
            .await;
        assert!(matches!(result, Err(PaymentError::InvalidInput(_))));
    }
}
