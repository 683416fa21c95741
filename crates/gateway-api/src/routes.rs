//! # Routes
//!
//! Axum router configuration for the payment facade.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /create_order   - Create a provider order
/// - POST /verify_payment - Verify a payment callback signature
/// - GET  /health         - Health check
pub fn create_router(state: AppState) -> Router {
    // The checkout widget runs on customer pages, so CORS stays permissive
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route("/create_order", post(handlers::create_order))
        .route("/verify_payment", post(handlers::verify_payment))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
