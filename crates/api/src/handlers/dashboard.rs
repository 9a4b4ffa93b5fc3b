//! Dashboard aggregates for the inventory and finance screens.

use axum::extract::State;
use axum::Json;
use ledger_core::invoice::net_profit;
use ledger_db::models::stats::{DashboardStats, FinanceStats, FinanceSummary};
use ledger_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Number of projects shown in the budget-vs-spend chart.
const PROJECT_HEALTH_LIMIT: i64 = 5;

/// GET /api/dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/finance/stats
///
/// Receivable income against payable expense, the pending invoice count and
/// budget against spend for the newest projects.
pub async fn finance_stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<FinanceStats>> {
    let (totals, projects) = tokio::try_join!(
        StatsRepo::invoice_totals(&state.pool),
        StatsRepo::recent_project_spend(&state.pool, PROJECT_HEALTH_LIMIT),
    )?;

    let summary = FinanceSummary {
        net_profit: net_profit(totals.total_income, totals.total_expense)?,
        total_income: totals.total_income,
        total_expense: totals.total_expense,
        pending_invoices: totals.pending_invoices,
    };

    Ok(Json(FinanceStats {
        summary,
        project_health: projects,
    }))
}
