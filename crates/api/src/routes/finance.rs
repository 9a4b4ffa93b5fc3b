//! Route definitions for the general ledger.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, finance};
use crate::state::AppState;

/// Routes mounted at `/finance`.
///
/// ```text
/// GET  /accounts               -> list_accounts
/// GET  /accounts/{id}/balance  -> account_balance
/// GET  /journal                -> list_journal_entries
/// POST /journal                -> post_journal_entry
/// GET  /stats                  -> dashboard::finance_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(finance::list_accounts))
        .route("/accounts/{id}/balance", get(finance::account_balance))
        .route(
            "/journal",
            get(finance::list_journal_entries).post(finance::post_journal_entry),
        )
        .route("/stats", get(dashboard::finance_stats))
}
