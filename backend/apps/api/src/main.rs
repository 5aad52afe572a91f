//! API Server Entry Point
//!
//! Composition root: configuration, logging, pool, schema, router.
//! Uses `anyhow` for startup errors; request-level errors are
//! `contact::ContactError` mapped to `kernel::error::AppError`.

mod app;
mod config;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::build_app;
use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_api=info,contact=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    let app = build_app(&config).await?;

    // Start server
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
