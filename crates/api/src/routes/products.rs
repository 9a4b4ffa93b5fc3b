//! Route definitions for the product catalogue.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /      -> list_products
/// POST   /      -> create_product
/// PUT    /{id}  -> update_product
/// DELETE /{id}  -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_products).post(products::create_product))
        .route(
            "/{id}",
            put(products::update_product).delete(products::delete_product),
        )
}
