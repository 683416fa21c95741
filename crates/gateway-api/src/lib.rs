//! # gateway-api
//!
//! HTTP API layer for the razorgate payment facade.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for order creation and payment verification
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create_order` | Create a provider order |
//! | POST | `/verify_payment` | Verify a payment signature |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
