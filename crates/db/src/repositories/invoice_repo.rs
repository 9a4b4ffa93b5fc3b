//! Repository for the `invoices` table.

use ledger_core::invoice::{STATUS_PAID, STATUS_PENDING};
use ledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{CreateInvoice, Invoice, InvoiceWithProject};

const COLUMNS: &str =
    "id, project_id, vendor_name, amount, invoice_type, due_date, status, created_at, updated_at";

/// Receivable and payable invoice storage.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice in `Pending` status.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (project_id, vendor_name, amount, invoice_type, due_date, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.project_id)
            .bind(input.vendor_name.trim())
            .bind(input.amount)
            .bind(&input.invoice_type)
            .bind(input.due_date)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// List every invoice with its project name, soonest due first.
    pub async fn list_with_project(pool: &PgPool) -> Result<Vec<InvoiceWithProject>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceWithProject>(
            "SELECT i.id, i.project_id, i.vendor_name, i.amount, i.invoice_type, i.due_date,
                    i.status, i.created_at, i.updated_at, p.name AS project_name
             FROM invoices i
             LEFT JOIN projects p ON p.id = i.project_id
             ORDER BY i.due_date ASC, i.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Mark an invoice as paid. Returns `None` if no row matches.
    ///
    /// Paying an already paid invoice leaves it unchanged apart from
    /// `updated_at`.
    pub async fn mark_paid(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(STATUS_PAID)
            .fetch_optional(pool)
            .await
    }
}
