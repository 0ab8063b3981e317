//! API documentation root endpoint.

use crate::app::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Home endpoint with API documentation.
///
/// # Endpoint
///
/// `GET /` (no authentication required)
///
/// Returns a machine-readable description of the available endpoints, the
/// authentication scheme, and an example request.
pub async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Abhishek Ambi's Portfolio Chatbot API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "chatbot_available": state.llm.is_some(),
        "authentication": if state.config.require_auth {
            "API key required (X-API-Key header)"
        } else {
            "disabled"
        },
        "endpoints": {
            "POST /ask": "Ask a question (open)",
            "POST /chat": "Send a message to the chatbot (requires 'chat' permission)",
            "GET /projects": "Get list of all projects (requires 'projects' permission)",
            "GET /projects/{name}": "Get specific project information (requires 'projects' permission)",
            "GET /skills": "Get technical skills summary (requires 'skills' permission)",
            "GET /recommendations": "Get career recommendations (requires 'recommendations' permission)",
            "GET /health": "Health check endpoint (no authentication required)",
            "POST /auth/generate-key": "Generate new API key",
            "GET /auth/keys": "List API keys",
            "POST /auth/revoke-key": "Revoke API key"
        },
        "usage": {
            "method": "POST",
            "url": "/ask",
            "body": { "question": "Your question here" },
            "example": { "question": "What are my strongest technical skills?" }
        }
    }))
}

/// Fallback handler for unknown routes.
///
/// Returns 404 with the list of available endpoints, matching the JSON shape
/// of every other error in the API.
pub async fn not_found() -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "status": "error",
            "available_endpoints": [
                "GET /",
                "POST /ask",
                "POST /chat",
                "GET /projects",
                "GET /projects/{name}",
                "GET /skills",
                "GET /recommendations",
                "GET /health",
                "POST /auth/generate-key",
                "GET /auth/keys",
                "POST /auth/revoke-key"
            ]
        })),
    )
}
