//! Route definitions for administration.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the `Admin` role.
///
/// ```text
/// GET /users            -> list_users
/// PUT /users/{id}/role  -> update_user_role
/// GET /audit-logs       -> list_audit_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/role", put(admin::update_user_role))
        .route("/audit-logs", get(admin::list_audit_logs))
}
