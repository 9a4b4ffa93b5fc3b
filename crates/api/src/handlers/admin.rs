//! Handlers for user administration and the audit trail.
//!
//! All endpoints require the `Admin` role.

use axum::extract::{Path, State};
use axum::Json;
use ledger_core::audit::{actions, role_change_details};
use ledger_core::error::CoreError;
use ledger_core::roles::{is_known_role, ALL_ROLES};
use ledger_core::types::DbId;
use ledger_db::models::audit::AuditLogWithUser;
use ledger_db::models::user::User;
use ledger_db::repositories::{AuditLogRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::json::ValidJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateRoleResponse {
    pub message: &'static str,
    pub user: User,
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// PUT /api/admin/users/{id}/role
///
/// Audited as "Updated User Role" under the acting admin.
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateRoleRequest>,
) -> AppResult<Json<UpdateRoleResponse>> {
    if !is_known_role(&input.role) {
        return Err(CoreError::Validation(format!(
            "Unknown role '{}'. Expected one of: {}",
            input.role,
            ALL_ROLES.join(", ")
        ))
        .into());
    }

    let user = UserRepo::update_role(&state.pool, id, &input.role)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    tracing::info!(user_id = id, admin_id = admin.user_id, role = %user.role, "User role updated");

    state.audit.log_action(
        admin.user_id,
        actions::UPDATED_USER_ROLE,
        role_change_details(id, &user.role),
    );

    Ok(Json(UpdateRoleResponse {
        message: "Role updated",
        user,
    }))
}

/// GET /api/admin/audit-logs
///
/// Newest first, joined with the acting user's name and role.
pub async fn list_audit_logs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AuditLogWithUser>>> {
    let logs = AuditLogRepo::list_with_users(&state.pool).await?;
    Ok(Json(logs))
}
