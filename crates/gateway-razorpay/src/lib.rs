//! # gateway-razorpay
//!
//! Razorpay payment provider for the razorgate facade.
//!
//! This crate implements the two provider-facing concerns:
//!
//! 1. **Order creation** — `RazorpayProvider` calls the Razorpay Orders API
//!    over HTTPS with basic auth and an explicit request timeout.
//! 2. **Signature verification** — recomputes the
//!    `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")` hex digest and
//!    compares it in constant time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gateway_razorpay::RazorpayProvider;
//! use gateway_core::{CreateOrderParams, Currency, PaymentProvider};
//!
//! // Create provider from environment (RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET)
//! let provider = RazorpayProvider::from_env()?;
//!
//! // Create an auto-capture order for 500 rupees
//! let amount = Currency::INR.to_minor_units(500).unwrap();
//! let order = provider
//!     .create_order(&CreateOrderParams::new(amount, Currency::INR))
//!     .await?;
//!
//! // Verify the checkout callback
//! provider.verify_payment_signature(&order.id, &payment_id, &signature)?;
//! ```

pub mod config;
pub mod orders;
pub mod signature;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayProvider;
pub use signature::{expected_signature, verify_payment_signature};
