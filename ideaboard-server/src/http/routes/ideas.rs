//! Idea endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::Idea;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::IdeaContent;

/// Create idea request
///
/// `content` is optional at the JSON level so a missing or null field is
/// reported as empty content (400) rather than a deserialization failure.
#[derive(Deserialize)]
pub struct CreateIdeaRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Idea response
#[derive(Debug, Serialize)]
pub struct IdeaResponse {
    pub id: i32,
    pub content: String,
    pub created_at: String,
}

impl From<Idea> for IdeaResponse {
    fn from(idea: Idea) -> Self {
        Self {
            id: idea.id,
            content: idea.content,
            created_at: idea.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/ideas - all ideas, newest first
async fn list_ideas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let ideas = state.store.list_ideas().await?;
    Ok(Json(ideas.into_iter().map(IdeaResponse::from).collect()))
}

/// POST /api/ideas - create a new idea
async fn create_idea(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let content = IdeaContent::new(req.content.as_deref().unwrap_or_default())?;
    let idea = state.store.insert_idea(content).await?;

    Ok((StatusCode::CREATED, Json(IdeaResponse::from(idea))))
}

/// Idea routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/ideas", get(list_ideas).post(create_idea))
}
