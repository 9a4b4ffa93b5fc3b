//! Handlers for sales orders.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::inventory::validate_quantity;
use ledger_db::models::order::{Order, OrderWithProduct, PlaceOrder, PlaceOrderOutcome};
use ledger_db::repositories::OrderRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub order: Order,
}

/// POST /api/orders
///
/// Places an order for the authenticated user. Stock is checked and
/// decremented atomically with the order insert; a rejected order changes
/// nothing.
pub async fn place_order(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<PlaceOrder>,
) -> AppResult<impl IntoResponse> {
    validate_quantity(input.quantity)?;

    let outcome =
        OrderRepo::place(&state.pool, user.user_id, input.product_id, input.quantity).await?;

    let order = match outcome {
        PlaceOrderOutcome::Placed(order) => order,
        PlaceOrderOutcome::ProductNotFound => {
            return Err(CoreError::NotFound {
                entity: "Product",
                id: input.product_id,
            }
            .into());
        }
        PlaceOrderOutcome::InsufficientStock { available } => {
            return Err(CoreError::InsufficientStock {
                product_id: input.product_id,
                requested: input.quantity,
                available,
            }
            .into());
        }
        PlaceOrderOutcome::TotalOutOfRange { total } => {
            return Err(CoreError::Validation(format!(
                "Order total {total} exceeds the maximum order value"
            ))
            .into());
        }
    };

    tracing::info!(
        order_id = order.id,
        user_id = user.user_id,
        product_id = order.product_id,
        quantity = order.quantity,
        total = %order.total_price,
        "Order placed"
    );

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            message: "Order placed successfully!",
            order,
        }),
    ))
}

/// GET /api/orders
///
/// The authenticated user's orders, newest first.
pub async fn list_my_orders(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<OrderWithProduct>>> {
    let orders = OrderRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(orders))
}
