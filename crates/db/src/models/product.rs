//! Product catalogue models.

use ledger_core::money::serialize_fixed;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    #[serde(serialize_with = "serialize_fixed")]
    pub price: Money,
    pub stock_quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product. Also used for full-replace updates.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub stock_quantity: i32,
}

pub type UpdateProduct = CreateProduct;
