//! Route definitions for the supplier directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::vendors;
use crate::state::AppState;

/// Routes mounted at `/vendors`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(vendors::list_vendors).post(vendors::create_vendor))
}
