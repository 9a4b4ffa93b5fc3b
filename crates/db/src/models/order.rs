//! Sales order models.

use ledger_core::money::serialize_fixed;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    /// Unit price times quantity at the time the order was placed.
    #[serde(serialize_with = "serialize_fixed")]
    pub total_price: Money,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order joined with the name of the ordered product.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithProduct {
    pub id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub quantity: i32,
    #[serde(serialize_with = "serialize_fixed")]
    pub total_price: Money,
    pub status: String,
    pub created_at: Timestamp,
}

/// Request body for placing an order. The user comes from the token.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrder {
    pub product_id: DbId,
    pub quantity: i32,
}

/// Result of an order placement attempt.
///
/// The rejection variants are only produced when nothing was written.
#[derive(Debug, Clone)]
pub enum PlaceOrderOutcome {
    Placed(Order),
    ProductNotFound,
    InsufficientStock { available: i32 },
    /// Unit price times quantity does not fit in `orders.total_price`.
    TotalOutOfRange { total: Money },
}
