//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (answer lookup, key registry calls)
//! 3. Returns HTTP response (JSON, status code)

/// Question answering endpoints (/ask, /chat)
pub mod chat;
/// Liveness endpoint
pub mod health;
/// API documentation root
pub mod home;
/// API key management endpoints
pub mod keys;
/// Portfolio convenience endpoints (/projects, /skills, /recommendations)
pub mod portfolio;
