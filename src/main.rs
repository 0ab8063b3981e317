//! Portfolio Chatbot API - Main Application Entry Point
//!
//! This is a REST API server that answers natural-language questions about a
//! portfolio (education, projects, skills, career). Answers come from an
//! external LLM when one is configured, with a built-in keyword knowledge
//! base as the always-available fallback. Access can be gated by API keys
//! with per-endpoint permissions.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: JSON file holding hashed API key records
//! - **Authentication**: API key with SHA-256 hashing (optional, via REQUIRE_AUTH)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Load the API key registry from the key store file
//! 3. Issue an initial key if auth is required and the store is empty
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load key registry and set up the chatbot
    let state = app::AppState::new(config).await;
    tracing::info!(
        "Key registry loaded ({} keys) from {}",
        state.registry.len().await,
        state.config.keys_file
    );

    // First run with auth enabled: issue a key so the API is reachable at all.
    // The secret is logged exactly once and cannot be recovered later.
    if state.config.require_auth && state.registry.is_empty().await {
        let generated = state
            .registry
            .generate(
                "Default API Key",
                "Initial key generated at first startup",
                Some(365),
                crate::models::api_key::DEFAULT_PERMISSIONS
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            )
            .await?;

        tracing::info!(
            "No API keys found; generated initial key (save it now, it will not be shown again): {}",
            generated.secret
        );
    }

    // Build the router
    let app = app::router(state.clone());

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", state.config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
