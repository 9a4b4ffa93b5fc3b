//! Handlers for construction projects.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::risk::validate_snapshot;
use ledger_db::models::project::{CreateProject, Project};
use ledger_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Project name is required".into()).into());
    }
    validate_snapshot(&input.snapshot())?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}
