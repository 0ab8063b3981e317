//! Application state and router assembly.
//!
//! One router serves both deployment modes: fully open, or with the chat and
//! portfolio endpoints behind API key authentication. The `REQUIRE_AUTH`
//! configuration flag selects the mode.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers, middleware,
    services::{chatbot::KeywordAnswerEngine, key_registry::ApiKeyRegistry, llm::LlmClient},
    store::KeyStore,
};

/// Shared application state, constructed once at process start and handed to
/// every handler by reference (no ambient globals).
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,

    /// Keyword-driven fallback answer engine
    pub engine: Arc<KeywordAnswerEngine>,

    /// API key registry, backed by the key store file
    pub registry: Arc<ApiKeyRegistry>,

    /// LLM client, present only when a provider credential is configured
    pub llm: Option<LlmClient>,

    /// Server start time, for uptime reporting
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build the application state: load the key store and set up the LLM
    /// client if a credential is configured.
    ///
    /// A failed LLM client setup is not fatal; the service runs on the
    /// knowledge base alone, exactly as when no credential is set.
    pub async fn new(config: Config) -> Self {
        let registry = ApiKeyRegistry::load(KeyStore::new(config.keys_file.clone())).await;

        let llm = match &config.groq_api_key {
            Some(api_key) => {
                match LlmClient::new(api_key.clone(), config.groq_model.clone()) {
                    Ok(client) => {
                        tracing::info!("LLM client initialized (model {})", config.groq_model);
                        Some(client)
                    }
                    Err(e) => {
                        tracing::error!("Failed to initialize LLM client: {}", e);
                        None
                    }
                }
            }
            None => {
                tracing::info!("No LLM credential configured; using fallback response system");
                None
            }
        };

        Self {
            config: Arc::new(config),
            engine: Arc::new(KeywordAnswerEngine::new()),
            registry: Arc::new(registry),
            llm,
            started_at: Utc::now(),
        }
    }
}

/// Build the HTTP router.
///
/// # Route Groups
///
/// - Public: `/`, `/health`, `/ask`, and the key management endpoints
/// - Protected (auth middleware applied only when `REQUIRE_AUTH` is set):
///   `/chat`, `/projects`, `/projects/{name}`, `/skills`, `/recommendations`
///
/// CORS is open to all origins so browser frontends can call the API
/// directly.
pub fn router(state: AppState) -> Router {
    let mut protected = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/projects", get(handlers::portfolio::list_projects))
        .route("/projects/{name}", get(handlers::portfolio::get_project))
        .route("/skills", get(handlers::portfolio::get_skills))
        .route(
            "/recommendations",
            get(handlers::portfolio::get_recommendations),
        );

    if state.config.require_auth {
        // Apply authentication middleware to all routes in this group
        protected = protected.route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));
    }

    Router::new()
        .route("/", get(handlers::home::home))
        .route("/health", get(handlers::health::health_check))
        .route("/ask", post(handlers::chat::ask))
        .route("/auth/generate-key", post(handlers::keys::generate_key))
        .route("/auth/keys", get(handlers::keys::list_keys))
        .route("/auth/revoke-key", post(handlers::keys::revoke_key))
        .merge(protected)
        .fallback(handlers::home::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_app(dir: &tempfile::TempDir, require_auth: bool) -> Router {
        let config = Config {
            server_port: 0,
            keys_file: dir
                .path()
                .join("api_keys.json")
                .to_string_lossy()
                .into_owned(),
            require_auth,
            groq_api_key: None,
            groq_model: "gemma2-9b-it".to_string(),
        };

        router(AppState::new(config).await)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        api_key: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(key) = api_key {
            builder = builder.header("X-API-Key", key);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn generate_key(app: &Router, permissions: Value) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/auth/generate-key",
            None,
            Some(json!({ "name": "test key", "permissions": permissions })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        body["api_key"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_public() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let (status, body) = send(&app, "GET", "/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["chatbot_available"], false);
        assert!(body["api_key_stats"]["total_keys"].is_number());
    }

    #[tokio::test]
    async fn ask_answers_from_the_knowledge_base() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false).await;

        let (status, body) = send(
            &app,
            "POST",
            "/ask",
            None,
            Some(json!({ "question": "What are your technical skills?" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["response_source"], "fallback");
        assert!(body["answer"].as_str().unwrap().contains("Technical Skills"));
    }

    #[tokio::test]
    async fn ask_rejects_an_empty_question() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false).await;

        let (status, body) = send(
            &app,
            "POST",
            "/ask",
            None,
            Some(json!({ "question": "   " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn chat_is_open_when_auth_is_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false).await;

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            None,
            Some(json!({ "message": "List your projects" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["response"].as_str().unwrap().contains("Project Portfolio"));
        assert!(body.get("api_key_used").is_none());
    }

    #[tokio::test]
    async fn chat_requires_a_key_when_auth_is_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            None,
            Some(json!({ "message": "hello" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "api_key_required");
    }

    #[tokio::test]
    async fn chat_rejects_an_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            Some("portfolio_bogus"),
            Some(json!({ "message": "hello" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_api_key");
    }

    #[tokio::test]
    async fn chat_works_with_a_generated_key() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let key = generate_key(&app, json!(["chat"])).await;

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            Some(&key),
            Some(json!({ "message": "What are your skills?" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["api_key_used"], "test key");
        assert!(body["usage_count"].as_u64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn bearer_header_is_accepted_as_an_alias() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let key = generate_key(&app, json!(["chat"])).await;

        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({ "message": "hello projects" })).unwrap(),
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_permission_is_forbidden() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        // Key can list projects but not chat
        let key = generate_key(&app, json!(["projects"])).await;

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            Some(&key),
            Some(json!({ "message": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "insufficient_permissions");

        let (status, body) = send(&app, "GET", "/projects", Some(&key), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["projects"].as_str().unwrap().contains("Project Portfolio"));
    }

    #[tokio::test]
    async fn revoked_key_stops_authenticating() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let key = generate_key(&app, json!(["chat"])).await;

        let (status, _) = send(
            &app,
            "POST",
            "/auth/revoke-key",
            None,
            Some(json!({ "api_key": key })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            "POST",
            "/chat",
            Some(&key),
            Some(json!({ "message": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_api_key");
    }

    #[tokio::test]
    async fn revoking_an_unknown_key_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let (status, body) = send(
            &app,
            "POST",
            "/auth/revoke-key",
            None,
            Some(json!({ "api_key": "portfolio_unknown" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "key_not_found");
    }

    #[tokio::test]
    async fn key_listing_never_contains_the_secret() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let key = generate_key(&app, json!(["chat"])).await;

        let (status, body) = send(&app, "GET", "/auth/keys", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_keys"], 1);

        let serialized = body.to_string();
        assert!(!serialized.contains(&key));
        assert!(body["keys"][0].get("key_hash").is_none());
    }

    #[tokio::test]
    async fn generate_key_requires_a_name() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, true).await;

        let (status, body) = send(
            &app,
            "POST",
            "/auth/generate-key",
            None,
            Some(json!({ "name": "" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn unknown_routes_list_the_available_endpoints() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false).await;

        let (status, body) = send(&app, "GET", "/nope", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(
            body["available_endpoints"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e == "POST /ask")
        );
    }
}
