//! Route definitions for sales orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /  -> list_my_orders
/// POST /  -> place_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(orders::list_my_orders).post(orders::place_order))
}
