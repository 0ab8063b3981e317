//! API key management HTTP handlers.
//!
//! This module implements the key lifecycle endpoints:
//! - POST /auth/generate-key - Issue a new key (secret returned once)
//! - GET /auth/keys - List key summaries and registry statistics
//! - POST /auth/revoke-key - Deactivate a key by its secret

use crate::{
    app::AppState,
    error::AppError,
    models::api_key::{GenerateKeyRequest, GenerateKeyResponse, ListKeysResponse, RevokeKeyRequest},
};
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Generate a new API key.
///
/// # Endpoint
///
/// `POST /auth/generate-key`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Portfolio site",
///   "description": "Key for the public frontend",
///   "expires_in_days": 365,
///   "permissions": ["chat", "projects", "skills", "recommendations"]
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the raw secret, shown exactly once
/// - **Error (400)**: name missing or empty
/// - **Error (500)**: key store write failure (the key was NOT issued)
pub async fn generate_key(
    State(state): State<AppState>,
    Json(request): Json<GenerateKeyRequest>,
) -> Result<Json<GenerateKeyResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Key name cannot be empty".to_string(),
        ));
    }

    let generated = state
        .registry
        .generate(
            request.name.trim(),
            &request.description,
            request.expires_in_days,
            request.permissions,
        )
        .await?;

    Ok(Json(GenerateKeyResponse {
        api_key: generated.secret,
        key_id: generated.record.key_id,
        name: generated.record.name,
        description: generated.record.description,
        expires_at: generated.record.expires_at,
        permissions: generated.record.permissions,
        status: "success".to_string(),
        message: "Save this key securely - it will not be shown again".to_string(),
    }))
}

/// List all API keys.
///
/// # Endpoint
///
/// `GET /auth/keys`
///
/// # Response
///
/// Summaries of every record plus aggregate statistics. Secrets and key
/// hashes are never included.
pub async fn list_keys(State(state): State<AppState>) -> Result<Json<ListKeysResponse>, AppError> {
    let keys = state.registry.list().await;
    let stats = state.registry.stats().await;

    Ok(Json(ListKeysResponse {
        keys,
        stats,
        status: "success".to_string(),
    }))
}

/// Revoke an API key.
///
/// # Endpoint
///
/// `POST /auth/revoke-key`
///
/// # Request Body
///
/// ```json
/// { "api_key": "portfolio_..." }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the key is deactivated (idempotent)
/// - **Error (404)**: no record matches the presented secret
pub async fn revoke_key(
    State(state): State<AppState>,
    Json(request): Json<RevokeKeyRequest>,
) -> Result<Json<Value>, AppError> {
    if request.api_key.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "API key required".to_string(),
        ));
    }

    let revoked = state.registry.revoke(&request.api_key).await?;

    if !revoked {
        return Err(AppError::KeyNotFound);
    }

    Ok(Json(json!({
        "message": "API key revoked successfully",
        "status": "success"
    })))
}
