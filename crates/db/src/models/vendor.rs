//! Supplier directory models.

use ledger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vendors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vendor {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a vendor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendor {
    pub name: String,
    pub category: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}
