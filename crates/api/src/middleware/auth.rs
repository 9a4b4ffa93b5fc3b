//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ledger_core::error::CoreError;
use ledger_core::types::DbId;

use crate::auth::verifier::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `Authorization: Bearer <token>` header.
///
/// Verification is delegated to the [`TokenVerifier`](crate::auth::verifier::TokenVerifier)
/// held in [`AppState`], so handlers never see raw tokens.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub email: String,
    /// One of the names in [`ledger_core::roles::ALL_ROLES`].
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let identity = state.verifier.verify(token).map_err(|e| match e {
            AuthError::Expired => unauthorized("Token has expired"),
            AuthError::Invalid => unauthorized("Invalid token"),
        })?;

        Ok(AuthUser {
            user_id: identity.id,
            email: identity.email,
            role: identity.role,
        })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
