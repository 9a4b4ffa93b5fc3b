//! Aggregate queries behind the dashboard endpoints.

use ledger_core::inventory::LOW_STOCK_THRESHOLD;
use ledger_core::invoice::{STATUS_PENDING, TYPE_PAYABLE, TYPE_RECEIVABLE};
use sqlx::PgPool;

use crate::models::stats::{DashboardStats, InvoiceTotals, ProjectSpend};

/// Read-only aggregates. Every sum is `COALESCE`d so empty tables give zero.
pub struct StatsRepo;

impl StatsRepo {
    /// Product, order, low-stock and revenue counters in one round trip.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM products)::BIGINT AS total_products,
                (SELECT COUNT(*) FROM orders)::BIGINT AS total_orders,
                (SELECT COUNT(*) FROM products WHERE stock_quantity < $1)::BIGINT AS low_stock,
                (SELECT COALESCE(SUM(total_price), 0) FROM orders) AS total_revenue",
        )
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_one(pool)
        .await
    }

    /// Receivable and payable sums plus the count of unpaid invoices.
    pub async fn invoice_totals(pool: &PgPool) -> Result<InvoiceTotals, sqlx::Error> {
        sqlx::query_as::<_, InvoiceTotals>(
            "SELECT
                COALESCE(SUM(amount) FILTER (WHERE invoice_type = $1), 0) AS total_income,
                COALESCE(SUM(amount) FILTER (WHERE invoice_type = $2), 0) AS total_expense,
                COUNT(*) FILTER (WHERE status = $3)::BIGINT AS pending_invoices
             FROM invoices",
        )
        .bind(TYPE_RECEIVABLE)
        .bind(TYPE_PAYABLE)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }

    /// Budget and spend of the `limit` most recently created projects.
    pub async fn recent_project_spend(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ProjectSpend>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSpend>(
            "SELECT name, budget, actual_spend
             FROM projects
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
