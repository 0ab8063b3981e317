//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the request headers
//! 2. Validate it against the key registry (hash lookup, active + expiry checks)
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{app::AppState, error::AppError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know which key made the request.
/// Permission checks are not answered from here; handlers run them through
/// the registry, where each check counts as a usage event of its own.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated API key
    pub key_id: Uuid,

    /// Display name of the key
    pub key_name: String,

    /// Usage counter as of the validation that authenticated this request
    pub usage_count: u64,

    /// The presented secret, kept so handlers can run permission checks
    /// through the registry. Never logged or serialized.
    pub secret: String,
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract the key from the `X-API-Key` header, or from
///    `Authorization: Bearer <key>` as an alias
/// 2. Validate it through the registry (this records a usage event)
/// 3. If valid: inject `AuthContext` into the request, call next handler
/// 4. If absent: return 401 "API key required"
/// 5. If unknown, revoked, or expired: return 401 "Invalid API key"
///    (the three cases are indistinguishable to the caller)
///
/// # Headers
///
/// ```text
/// X-API-Key: portfolio_abc123...
/// Authorization: Bearer portfolio_abc123...
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&request).ok_or(AppError::MissingApiKey)?;

    // Registry lookup; also bumps the key's usage counter
    let record = state
        .registry
        .validate(&api_key)
        .await?
        .ok_or(AppError::InvalidApiKey)?;

    let auth_context = AuthContext {
        key_id: record.key_id,
        key_name: record.name,
        usage_count: record.usage_count,
        secret: api_key,
    };

    tracing::debug!(
        "Request authenticated with key '{}' ({})",
        auth_context.key_name,
        auth_context.key_id
    );

    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}

/// Pull the API key out of the request headers.
///
/// `X-API-Key` is the primary carrier; `Authorization: Bearer` is accepted
/// as an alias.
fn extract_api_key(request: &Request) -> Option<String> {
    if let Some(key) = request
        .headers()
        .get("X-API-Key")
        .and_then(|h| h.to_str().ok())
    {
        return Some(key.to_string());
    }

    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|key| key.to_string())
}
