//! Handlers for the product catalogue.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::inventory::validate_product;
use ledger_core::types::DbId;
use ledger_db::models::product::{CreateProduct, Product, UpdateProduct};
use ledger_db::repositories::ProductRepo;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidJson(input): ValidJson<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_product(&input.name, input.price, input.stock_quantity)?;
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
///
/// Full replace of the product's editable fields.
pub async fn update_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    validate_product(&input.name, input.price, input.stock_quantity)?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
///
/// A product that has orders cannot be deleted (409 via `fk_orders_product`).
pub async fn delete_product(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Product",
            id,
        }
        .into());
    }
    tracing::info!(product_id = id, "Product deleted");
    Ok(Json(json!({ "message": "Product deleted" })))
}
