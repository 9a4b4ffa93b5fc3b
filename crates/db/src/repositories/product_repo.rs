//! Repository for the `products` table.

use ledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

const COLUMNS: &str = "id, name, category, price, stock_quantity, created_at, updated_at";

/// Provides CRUD operations for the product catalogue.
pub struct ProductRepo;

impl ProductRepo {
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, category, price, stock_quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.stock_quantity)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Replace every editable field. Returns `None` if no row matches.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                category = $3,
                price = $4,
                stock_quantity = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.stock_quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
