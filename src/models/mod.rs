//! Data models for stored records and API request/response types.

/// API key record, summary, and key-management wire types
pub mod api_key;
/// Chat question/answer wire types
pub mod chat;
