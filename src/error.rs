//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Storage Errors**: Key store read/write failures (I/O or serialization)
/// - **Authentication Errors**: Missing, invalid, revoked, or expired API keys
/// - **Permission Errors**: Valid key lacking a required permission
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading or writing the key store file failed.
    ///
    /// This wraps any std::io::Error using the `#[from]` attribute, which
    /// automatically implements `From<std::io::Error> for AppError`.
    #[error("Key store I/O error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serializing or deserializing the key store failed.
    #[error("Key store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No API key was provided on a protected endpoint.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("API key required")]
    MissingApiKey,

    /// API key is unknown, revoked, or expired.
    ///
    /// The three cases are deliberately indistinguishable to the caller
    /// so the response never leaks which one applied.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// API key is valid but does not carry the required permission.
    ///
    /// Returns HTTP 403 Forbidden.
    /// The String names the missing permission.
    #[error("API key does not have {0} permission")]
    InsufficientPermission(String),

    /// The key presented for revocation does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("API key not found")]
    KeyNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `MissingApiKey` → 401 Unauthorized
/// - `InvalidApiKey` → 401 Unauthorized
/// - `InsufficientPermission` → 403 Forbidden
/// - `KeyNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Storage` / `Serialize` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::MissingApiKey => (
                StatusCode::UNAUTHORIZED,
                "api_key_required",
                self.to_string(),
            ),
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::InsufficientPermission(_) => (
                StatusCode::FORBIDDEN,
                "insufficient_permissions",
                self.to_string(),
            ),
            AppError::KeyNotFound => (StatusCode::NOT_FOUND, "key_not_found", self.to_string()),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Storage(_) | AppError::Serialize(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
