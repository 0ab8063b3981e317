//! Portfolio convenience HTTP handlers.
//!
//! These endpoints address a knowledge category directly instead of going
//! through a free-text question:
//! - GET /projects - project portfolio listing
//! - GET /projects/{name} - detail for one project
//! - GET /skills - technical skills summary
//! - GET /recommendations - career recommendations
//!
//! Each requires its namesake permission when authentication is enabled.
//! The LLM is asked with a fixed question when configured; otherwise the
//! answer comes straight from the named topic, bypassing keyword matching
//! (the fixed questions mention "projects" and would otherwise all land on
//! the projects topic).

use crate::{
    app::AppState,
    error::AppError,
    handlers::chat::answer_question,
    middleware::auth::AuthContext,
    models::chat::{
        ProjectDetailResponse, ProjectsResponse, RecommendationsResponse, SkillsResponse,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};

/// Run the per-endpoint permission check when a request is authenticated.
///
/// Goes through the registry rather than an already-extracted permission
/// list, so the check counts as a usage event like any other validation.
async fn check_permission(
    state: &AppState,
    auth: &Option<Extension<AuthContext>>,
    permission: &str,
) -> Result<(), AppError> {
    if let Some(Extension(ctx)) = auth {
        if !state
            .registry
            .has_permission(&ctx.secret, permission)
            .await?
        {
            return Err(AppError::InsufficientPermission(permission.to_string()));
        }
    }

    Ok(())
}

/// Answer a category question: LLM when configured, named topic otherwise.
async fn category_answer(state: &AppState, question: &str, topic: &str) -> String {
    if let Some(llm) = &state.llm {
        match llm.ask(question).await {
            Ok(answer) => return answer,
            Err(e) => {
                tracing::warn!("LLM call failed, answering from knowledge base: {}", e);
            }
        }
    }

    state
        .engine
        .topic_answer(topic)
        .unwrap_or_else(|| state.engine.default_answer())
        .to_string()
}

/// List all portfolio projects.
///
/// # Endpoint
///
/// `GET /projects` (requires "projects" permission when auth is enabled)
pub async fn list_projects(
    State(state): State<AppState>,
    auth: Option<Extension<AuthContext>>,
) -> Result<Json<ProjectsResponse>, AppError> {
    check_permission(&state, &auth, "projects").await?;

    let projects = category_answer(
        &state,
        "List all my projects with their technologies",
        "projects",
    )
    .await;

    Ok(Json(ProjectsResponse {
        projects,
        status: "success".to_string(),
        api_key_used: auth.as_ref().map(|a| a.key_name.clone()),
    }))
}

/// Get details for one project by name.
///
/// # Endpoint
///
/// `GET /projects/{name}` (requires "projects" permission when auth is enabled)
pub async fn get_project(
    State(state): State<AppState>,
    auth: Option<Extension<AuthContext>>,
    Path(name): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    check_permission(&state, &auth, "projects").await?;

    // A per-project question; the keyword fallback resolves it to the
    // project portfolio overview
    let question = format!("Tell me detailed information about the project: {}", name);
    let (project, _) = answer_question(&state, &question).await;

    Ok(Json(ProjectDetailResponse {
        project,
        status: "success".to_string(),
        api_key_used: auth.as_ref().map(|a| a.key_name.clone()),
    }))
}

/// Summarize technical skills.
///
/// # Endpoint
///
/// `GET /skills` (requires "skills" permission when auth is enabled)
pub async fn get_skills(
    State(state): State<AppState>,
    auth: Option<Extension<AuthContext>>,
) -> Result<Json<SkillsResponse>, AppError> {
    check_permission(&state, &auth, "skills").await?;

    let skills = category_answer(
        &state,
        "Summarize my technical skills based on my projects",
        "skills",
    )
    .await;

    Ok(Json(SkillsResponse {
        skills,
        status: "success".to_string(),
        api_key_used: auth.as_ref().map(|a| a.key_name.clone()),
    }))
}

/// Get career recommendations.
///
/// # Endpoint
///
/// `GET /recommendations` (requires "recommendations" permission when auth is enabled)
pub async fn get_recommendations(
    State(state): State<AppState>,
    auth: Option<Extension<AuthContext>>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    check_permission(&state, &auth, "recommendations").await?;

    let recommendations = category_answer(
        &state,
        "Based on my portfolio, which technologies should I focus on for career growth?",
        "career",
    )
    .await;

    Ok(Json(RecommendationsResponse {
        recommendations,
        status: "success".to_string(),
        api_key_used: auth.as_ref().map(|a| a.key_name.clone()),
    }))
}
