//! # Application State
//!
//! Shared state for the Axum application. Holds the injected payment
//! provider and the server configuration; there is no other state, every
//! request is independent.

use gateway_core::BoxedPaymentProvider;
use gateway_razorpay::RazorpayProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider (Razorpay in production, a mock in tests)
    pub provider: BoxedPaymentProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Razorpay provider.
    ///
    /// Fails when `RAZORPAY_KEY_ID` / `RAZORPAY_KEY_SECRET` are missing or
    /// malformed; the service must not come up with placeholder credentials.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let provider = RazorpayProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        Ok(Self::with_provider(Arc::new(provider), config))
    }

    /// Create an AppState around an already-built provider (for tests)
    pub fn with_provider(provider: BoxedPaymentProvider, config: AppConfig) -> Self {
        Self { provider, config }
    }
}
