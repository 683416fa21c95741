//! # Payment Error Types
//!
//! Typed error handling for the razorgate payment facade.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (missing fields, bad amounts)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Payment signature verification failed
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Payment provider API error
    #[error("Provider error [{code}]: {description}")]
    ProviderError { code: String, description: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::NetworkError(_) | PaymentError::ProviderError { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidInput(_) => 400,
            PaymentError::SignatureMismatch => 400,
            PaymentError::ProviderError { .. } => 502,
            PaymentError::NetworkError(_) => 504,
            PaymentError::Serialization(_) => 502,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
