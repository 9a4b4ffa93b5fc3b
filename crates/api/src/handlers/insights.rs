//! Derived analytics over stored projects.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use ledger_core::error::CoreError;
use ledger_core::risk::{self, RiskAssessment};
use ledger_core::types::DbId;
use ledger_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Risk payload for one project.
#[derive(Debug, Serialize)]
pub struct ProjectRiskReport {
    pub project_id: DbId,
    pub project_name: String,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

/// GET /api/ai/risk/{id}
///
/// Scores the project against the current time. Read-only.
pub async fn project_risk(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectRiskReport>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;

    let assessment = risk::score(&project.snapshot(), Utc::now());

    tracing::debug!(
        project_id = project.id,
        risk_score = assessment.risk_score,
        risk_level = assessment.risk_level.label(),
        "Project risk scored"
    );

    Ok(Json(ProjectRiskReport {
        project_id: project.id,
        project_name: project.name,
        assessment,
    }))
}
