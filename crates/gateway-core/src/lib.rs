//! # gateway-core
//!
//! Core types and traits for the razorgate payment facade.
//!
//! This crate provides:
//! - `PaymentProvider` trait for implementing payment providers
//! - `Order`, `OrderStatus`, and `Currency` for the provider order model
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gateway_core::{CreateOrderParams, Currency, PaymentProvider};
//!
//! // Convert rupees to paise and create an order
//! let amount = Currency::INR.to_minor_units(500).unwrap();
//! let order = provider
//!     .create_order(&CreateOrderParams::new(amount, Currency::INR))
//!     .await?;
//!
//! // Later, verify the payment callback
//! provider.verify_payment_signature(&order.id, "pay_123", &signature)?;
//! ```

pub mod error;
pub mod order;
pub mod provider;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use order::{Currency, Order, OrderStatus};
pub use provider::{BoxedPaymentProvider, CreateOrderParams, PaymentProvider};
