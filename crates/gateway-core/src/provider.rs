//! # Payment Provider Trait
//!
//! Core trait for payment provider implementations.
//!
//! The HTTP layer depends only on this trait; the concrete provider is
//! injected at construction time so handlers can be tested against a mock
//! without touching the network.

use crate::error::PaymentResult;
use crate::order::{Currency, Order};
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for creating a provider order
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    /// Amount in minor currency units (paise)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
    /// Optional caller receipt reference, forwarded to the provider
    pub receipt: Option<String>,
}

impl CreateOrderParams {
    /// Create params for an auto-capture order in minor units
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            receipt: None,
        }
    }

    /// Builder: attach a receipt reference
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }
}

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an auto-capture order in the provider's system.
    ///
    /// This is a live, billable side effect: calling twice creates two
    /// distinct orders. The facade keeps no local record.
    async fn create_order(&self, params: &CreateOrderParams) -> PaymentResult<Order>;

    /// Verify a payment callback signature.
    ///
    /// Returns `Ok(())` when the supplied signature matches the one the
    /// provider would have produced for this `order_id`/`payment_id` pair,
    /// `Err(PaymentError::SignatureMismatch)` otherwise.
    fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> PaymentResult<()>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_params_builder() {
        let params = CreateOrderParams::new(50_000, Currency::INR).with_receipt("rcpt_42");
        assert_eq!(params.amount, 50_000);
        assert_eq!(params.currency, Currency::INR);
        assert_eq!(params.receipt.as_deref(), Some("rcpt_42"));
    }
}
