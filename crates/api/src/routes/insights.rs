//! Route definitions for derived analytics.

use axum::routing::get;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// GET /risk/{id}  -> project_risk
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/risk/{id}", get(insights::project_risk))
}
