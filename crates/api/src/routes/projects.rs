//! Route definitions for construction projects.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(projects::list_projects).post(projects::create_project),
    )
}
