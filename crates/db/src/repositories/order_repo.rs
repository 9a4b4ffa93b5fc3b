//! Repository for the `orders` table.

use ledger_core::inventory::{order_total, validate_order_total, ORDER_STATUS_PENDING};
use ledger_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::order::{Order, OrderWithProduct, PlaceOrderOutcome};

const COLUMNS: &str =
    "id, user_id, product_id, quantity, total_price, status, created_at, updated_at";

/// Order placement and per-user order history.
pub struct OrderRepo;

impl OrderRepo {
    /// Place an order, decrementing stock in the same transaction.
    ///
    /// The stock check and decrement are one conditional `UPDATE`, so two
    /// concurrent orders for the same product serialize on the row lock and
    /// the second one sees the post-decrement quantity. Stock can therefore
    /// never be oversold or go negative. When the update matches no row the
    /// product is re-read to tell a missing product from a short one, and
    /// nothing is written. A total too wide for the orders table also rolls
    /// the decrement back.
    pub async fn place(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
        quantity: i32,
    ) -> Result<PlaceOrderOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let price: Option<Money> = sqlx::query_scalar(
            "UPDATE products SET stock_quantity = stock_quantity - $2
             WHERE id = $1 AND stock_quantity >= $2
             RETURNING price",
        )
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(price) = price else {
            let available: Option<i32> =
                sqlx::query_scalar("SELECT stock_quantity FROM products WHERE id = $1")
                    .bind(product_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            tx.rollback().await?;

            return Ok(match available {
                None => PlaceOrderOutcome::ProductNotFound,
                Some(available) => {
                    tracing::debug!(product_id, quantity, available, "Order rejected: insufficient stock");
                    PlaceOrderOutcome::InsufficientStock { available }
                }
            });
        };

        let total = order_total(price, quantity);
        if validate_order_total(total).is_err() {
            tx.rollback().await?;
            tracing::debug!(product_id, quantity, total = %total, "Order rejected: total out of range");
            return Ok(PlaceOrderOutcome::TotalOutOfRange { total });
        }

        let query = format!(
            "INSERT INTO orders (user_id, product_id, quantity, total_price, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .bind(product_id)
            .bind(quantity)
            .bind(total)
            .bind(ORDER_STATUS_PENDING)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(PlaceOrderOutcome::Placed(order))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's orders with product names, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OrderWithProduct>, sqlx::Error> {
        sqlx::query_as::<_, OrderWithProduct>(
            "SELECT o.id, o.product_id, p.name AS product_name, o.quantity,
                    o.total_price, o.status, o.created_at
             FROM orders o
             JOIN products p ON p.id = o.product_id
             WHERE o.user_id = $1
             ORDER BY o.created_at DESC, o.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
