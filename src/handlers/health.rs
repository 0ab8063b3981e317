//! Health check endpoint for service monitoring.

use crate::{app::AppState, models::api_key::KeyStats};
use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

/// Health check response.
///
/// Reports service status, LLM availability, and key registry statistics.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Whether the external LLM is configured
    pub chatbot_available: bool,

    /// Crate version
    pub api_version: String,

    /// Seconds since the server started
    pub uptime_seconds: i64,

    /// Aggregate API key statistics
    pub api_key_stats: KeyStats,
}

/// Health check handler.
///
/// # Endpoint
///
/// `GET /health` (no authentication required)
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "chatbot_available": false,
///   "api_version": "0.1.0",
///   "uptime_seconds": 42,
///   "api_key_stats": { "total_keys": 1, "active_keys": 1, "expired_keys": 0, "total_usage": 7 }
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        chatbot_available: state.llm.is_some(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        api_key_stats: state.registry.stats().await,
    })
}
