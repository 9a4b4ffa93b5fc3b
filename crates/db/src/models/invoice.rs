//! Receivable and payable invoice models.

use chrono::NaiveDate;
use ledger_core::money::serialize_fixed;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub vendor_name: String,
    #[serde(serialize_with = "serialize_fixed")]
    pub amount: Money,
    /// Receivable or Payable.
    #[serde(rename = "type")]
    pub invoice_type: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An invoice with the name of its project, if it has one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithProject {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub invoice: Invoice,
    pub project_name: Option<String>,
}

/// DTO for raising an invoice. New invoices are always `Pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub project_id: Option<DbId>,
    pub vendor_name: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub invoice_type: String,
    pub due_date: NaiveDate,
}
