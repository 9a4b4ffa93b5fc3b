//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ledger_core::error::CoreError;
use ledger_core::roles::ROLE_ADMIN;
use ledger_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `Admin` role. Rejects with 403 Forbidden otherwise.
///
/// The role claim in the token only short-circuits obvious non-admins. The
/// stored role is then re-read, so a demoted or deleted admin loses access
/// immediately rather than when their token expires.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(admin_required());
        }

        let stored_role = UserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .map(|u| u.role);
        if stored_role.as_deref() != Some(ROLE_ADMIN) {
            tracing::warn!(
                user_id = user.user_id,
                stored_role = ?stored_role,
                "Admin token no longer matches stored role"
            );
            return Err(admin_required());
        }

        Ok(RequireAdmin(user))
    }
}

fn admin_required() -> AppError {
    AppError::Core(CoreError::Forbidden("Admin role required".into()))
}
