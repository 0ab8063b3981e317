//! Business logic, separated from HTTP concerns.

/// Keyword-driven fallback answer engine
pub mod chatbot;
/// API key issuance, validation, and revocation
pub mod key_registry;
/// Static topic and unknown-topic answer tables
pub mod knowledge;
/// External LLM provider client
pub mod llm;
