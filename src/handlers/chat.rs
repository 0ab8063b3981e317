//! Question answering HTTP handlers.
//!
//! Two endpoints accept free-text questions:
//! - POST /ask - open question/answer endpoint (field names: question/answer)
//! - POST /chat - chat endpoint (field names: message/response); requires the
//!   "chat" permission when authentication is enabled
//!
//! Both prefer the external LLM when one is configured and fall back to the
//! keyword engine when it is absent or fails, so an answer is always
//! produced.

use crate::{
    app::AppState,
    error::AppError,
    middleware::auth::AuthContext,
    models::chat::{AskRequest, AskResponse, ChatRequest, ChatResponse, ResponseSource},
};
use axum::{Extension, Json, extract::State};

/// Produce an answer, preferring the LLM over the keyword engine.
///
/// LLM failures are logged and absorbed here; the keyword engine is the
/// always-available substitute path.
pub(crate) async fn answer_question(state: &AppState, question: &str) -> (String, ResponseSource) {
    if let Some(llm) = &state.llm {
        match llm.ask(question).await {
            Ok(answer) => return (answer, ResponseSource::AiPowered),
            Err(e) => {
                tracing::warn!("LLM call failed, answering from knowledge base: {}", e);
            }
        }
    }

    (
        state.engine.ask(question).to_string(),
        ResponseSource::Fallback,
    )
}

/// Ask a question.
///
/// # Endpoint
///
/// `POST /ask`
///
/// # Request Body
///
/// ```json
/// {
///   "question": "What are your technical skills?"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the answer, with its source
/// - **Error (400)**: question missing or empty after trimming
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = request.question.trim();

    if question.is_empty() {
        return Err(AppError::InvalidRequest(
            "Question cannot be empty".to_string(),
        ));
    }

    let (answer, response_source) = answer_question(&state, question).await;

    Ok(Json(AskResponse {
        question: question.to_string(),
        answer,
        status: "success".to_string(),
        response_source,
        chatbot_available: state.llm.is_some(),
    }))
}

/// Send a chat message.
///
/// # Endpoint
///
/// `POST /chat`
///
/// # Authentication
///
/// When `REQUIRE_AUTH` is enabled this route sits behind the auth middleware
/// and additionally requires the "chat" permission. The permission check runs
/// through the registry and counts as a usage event of its own, on top of the
/// validation the middleware already performed.
///
/// # Response
///
/// - **Success (200 OK)**: the answer; echoes the authenticating key's name
///   and usage counter when authentication is enabled
/// - **Error (400)**: message missing or empty
/// - **Error (401/403)**: missing/invalid key or missing "chat" permission
pub async fn chat(
    State(state): State<AppState>,
    auth: Option<Extension<AuthContext>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if let Some(Extension(ref ctx)) = auth {
        if !state.registry.has_permission(&ctx.secret, "chat").await? {
            return Err(AppError::InsufficientPermission("chat".to_string()));
        }
    }

    let message = request.message.trim();

    if message.is_empty() {
        return Err(AppError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }

    let (response, response_source) = answer_question(&state, message).await;

    Ok(Json(ChatResponse {
        message: message.to_string(),
        response,
        status: "success".to_string(),
        response_source,
        api_key_used: auth.as_ref().map(|a| a.key_name.clone()),
        usage_count: auth.as_ref().map(|a| a.usage_count),
    }))
}
