//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay integration.
//! All secrets are loaded from environment variables; there are no fallback
//! defaults, so the process refuses to start without explicit credentials.

use gateway_core::PaymentError;
use std::env;

/// Razorpay API configuration
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// Public key ID (rzp_test_... or rzp_live_...)
    pub key_id: String,

    /// Key secret, used for API auth and signature verification
    pub key_secret: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_KEY_SECRET`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let key_id = env::var("RAZORPAY_KEY_ID")
            .map_err(|_| PaymentError::Configuration("RAZORPAY_KEY_ID not set".to_string()))?;

        let key_secret = env::var("RAZORPAY_KEY_SECRET")
            .map_err(|_| PaymentError::Configuration("RAZORPAY_KEY_SECRET not set".to_string()))?;

        Self::new(key_id, key_secret).validated()
    }

    /// Create config with explicit values (for testing)
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Validate key formats. Empty credentials are rejected so a missing
    /// value can never silently degrade into a shared well-known secret.
    pub fn validated(self) -> Result<Self, PaymentError> {
        if !self.key_id.starts_with("rzp_test_") && !self.key_id.starts_with("rzp_live_") {
            return Err(PaymentError::Configuration(
                "RAZORPAY_KEY_ID must start with rzp_test_ or rzp_live_".to_string(),
            ));
        }

        if self.key_secret.is_empty() {
            return Err(PaymentError::Configuration(
                "RAZORPAY_KEY_SECRET must not be empty".to_string(),
            ));
        }

        Ok(self)
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
