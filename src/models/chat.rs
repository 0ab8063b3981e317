//! Chat request/response types.
//!
//! Two endpoints accept questions with slightly different field names, kept
//! for compatibility with existing clients:
//! - `POST /ask` uses `question` / `answer`
//! - `POST /chat` uses `message` / `response`

use serde::{Deserialize, Serialize};

/// Where an answer came from.
///
/// `AiPowered` means the external LLM produced it; `Fallback` means the
/// built-in keyword knowledge base did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSource {
    AiPowered,
    Fallback,
}

/// Request body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The user's question (must be non-empty after trimming)
    #[serde(default)]
    pub question: String,
}

/// Response body for `POST /ask`.
///
/// # JSON Example
///
/// ```json
/// {
///   "question": "What are your technical skills?",
///   "answer": "**Abhishek's Technical Skills** ...",
///   "status": "success",
///   "response_source": "fallback",
///   "chatbot_available": false
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// The question as received
    pub question: String,

    /// The answer text
    pub answer: String,

    /// Always "success"
    pub status: String,

    /// Whether the answer came from the LLM or the knowledge base
    pub response_source: ResponseSource,

    /// Whether the LLM collaborator is configured
    pub chatbot_available: bool,
}

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message (must be non-empty after trimming)
    #[serde(default)]
    pub message: String,
}

/// Response body for `POST /chat`.
///
/// The `api_key_used` and `usage_count` fields are present only when the
/// request was authenticated.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The message as received
    pub message: String,

    /// The answer text
    pub response: String,

    /// Always "success"
    pub status: String,

    /// Whether the answer came from the LLM or the knowledge base
    pub response_source: ResponseSource,

    /// Name of the API key that authenticated this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_used: Option<String>,

    /// Usage counter of that key as of the authenticating validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u64>,
}

/// Response body for `GET /projects`.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    /// Portfolio project listing
    pub projects: String,

    /// Always "success"
    pub status: String,

    /// Name of the API key that authenticated this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_used: Option<String>,
}

/// Response body for `GET /projects/{name}`.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    /// Detail text for the requested project
    pub project: String,

    /// Always "success"
    pub status: String,

    /// Name of the API key that authenticated this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_used: Option<String>,
}

/// Response body for `GET /skills`.
#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    /// Technical skills summary
    pub skills: String,

    /// Always "success"
    pub status: String,

    /// Name of the API key that authenticated this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_used: Option<String>,
}

/// Response body for `GET /recommendations`.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Career recommendations text
    pub recommendations: String,

    /// Always "success"
    pub status: String,

    /// Name of the API key that authenticated this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_used: Option<String>,
}
