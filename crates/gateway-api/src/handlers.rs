//! # Request Handlers
//!
//! Axum request handlers for the payment facade: order creation against the
//! provider and payment signature verification.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gateway_core::{CreateOrderParams, Currency, PaymentError};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in major currency units (rupees)
    pub amount: i64,
    /// Optional receipt reference forwarded to the provider
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Create order response
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    /// Provider-assigned order ID
    pub order_id: String,
    /// Provider-confirmed amount in minor units (paise)
    pub amount: i64,
    /// Currency code
    pub currency: Currency,
    /// Provider-reported order status
    pub status: String,
}

/// Verify payment request
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Error response (`{"error": "..."}`)
///
/// The shape is fixed: clients of the original facade match on the `error`
/// key, so no extra fields are added here.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn payment_error_to_response(err: &PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "razorgate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a provider order for the requested amount.
///
/// The inbound amount is in rupees; the provider is paid in paise, so the
/// amount is multiplied by 100 before the call. Not idempotent: every call
/// creates a distinct live order.
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|e| bad_request(e.body_text()))?;

    if request.amount <= 0 {
        return Err(bad_request("amount must be a positive integer"));
    }

    let currency = Currency::INR;
    let amount = currency
        .to_minor_units(request.amount)
        .ok_or_else(|| bad_request("amount out of range"))?;

    let mut params = CreateOrderParams::new(amount, currency);
    if let Some(receipt) = request.receipt {
        params = params.with_receipt(receipt);
    }

    info!("Creating order: {} paise via {}", amount, state.provider.provider_name());

    let order = state.provider.create_order(&params).await.map_err(|e| {
        error!("Failed to create order: {}", e);
        payment_error_to_response(&e)
    })?;

    info!("Created order: {}", order.id);

    Ok(Json(CreateOrderResponse {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        status: order.status.as_str().to_string(),
    }))
}

/// Verify a payment callback signature.
///
/// Pure check, no side effects: a success here does not mark anything as
/// paid, it only confirms the callback came from the provider.
#[instrument(skip(state, payload))]
pub async fn verify_payment(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let Json(request) = payload.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.body_text() })),
        )
    })?;

    match state
        .provider
        .verify_payment_signature(&request.order_id, &request.payment_id, &request.signature)
    {
        Ok(()) => {
            info!("Verified payment {} for order {}", request.payment_id, request.order_id);
            Ok(Json(serde_json::json!({ "status": "success" })))
        }
        Err(PaymentError::SignatureMismatch) => {
            warn!(
                "Signature mismatch for order {}, payment {}",
                request.order_id, request.payment_id
            );
            Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "failure",
                    "reason": "Invalid signature"
                })),
            ))
        }
        Err(e) => {
            error!("Verification error: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(serde_json::json!({ "error": e.to_string() }))))
        }
    }
}
