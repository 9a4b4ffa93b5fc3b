//! Aggregate read models for the dashboards.

use ledger_core::money::serialize_fixed;
use ledger_core::types::Money;
use serde::Serialize;
use sqlx::FromRow;

/// Catalogue and sales counters for the main dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_orders: i64,
    /// Products below `LOW_STOCK_THRESHOLD` units.
    pub low_stock: i64,
    /// Sum of every order total; zero when there are no orders.
    #[serde(serialize_with = "serialize_fixed")]
    pub total_revenue: Money,
}

/// Invoice sums by type plus the number still awaiting payment.
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceTotals {
    pub total_income: Money,
    pub total_expense: Money,
    pub pending_invoices: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinanceSummary {
    #[serde(serialize_with = "serialize_fixed")]
    pub total_income: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub total_expense: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub net_profit: Money,
    pub pending_invoices: i64,
}

/// Budget against spend for one project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSpend {
    pub name: String,
    #[serde(serialize_with = "serialize_fixed")]
    pub budget: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub actual_spend: Money,
}

/// Payload of the finance dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct FinanceStats {
    pub summary: FinanceSummary,
    pub project_health: Vec<ProjectSpend>,
}
