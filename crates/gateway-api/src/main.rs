//! # Razorgate RS
//!
//! Minimal HTTP facade over the Razorpay Orders API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (no defaults; the server refuses to start
//! # without explicit credentials)
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//!
//! # Run the server
//! razorgate
//! ```

use gateway_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state (fails fast on missing credentials)
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    info!("Payment provider: {}", state.provider.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Razorgate starting on http://{}", addr);
    info!("💳 Create order: POST http://{}/create_order", addr);
    info!("✅ Verify payment: POST http://{}/verify_payment", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
