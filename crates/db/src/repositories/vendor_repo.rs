//! Repository for the `vendors` table.

use sqlx::PgPool;

use crate::models::vendor::{CreateVendor, Vendor};

const COLUMNS: &str = "id, name, category, contact_email, phone, created_at, updated_at";

/// Supplier directory storage.
pub struct VendorRepo;

impl VendorRepo {
    pub async fn create(pool: &PgPool, input: &CreateVendor) -> Result<Vendor, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors (name, category, contact_email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(input.name.trim())
            .bind(&input.category)
            .bind(&input.contact_email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// List all vendors alphabetically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }
}
