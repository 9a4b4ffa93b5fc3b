pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod health;
pub mod insights;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod projects;
pub mod vendors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/signup                       signup (public)
/// /auth/login                        login (public)
///
/// /finance/accounts                  chart of accounts
/// /finance/accounts/{id}/balance     derived balance
/// /finance/journal                   list, post
/// /finance/stats                     income, expense, project spend
/// /invoices                          list, create
/// /invoices/{id}/pay                 mark paid
///
/// /orders                            list mine, place
/// /products                          list, create
/// /products/{id}                     update, delete
/// /projects                          list, create
/// /vendors                           list, create
/// /dashboard/stats                   catalogue and sales counters
/// /ai/risk/{id}                      project risk score
///
/// /admin/users                       list (admin only)
/// /admin/users/{id}/role             change role (admin only)
/// /admin/audit-logs                  audit trail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/finance", finance::router())
        .nest("/invoices", invoices::router())
        .nest("/orders", orders::router())
        .nest("/products", products::router())
        .nest("/projects", projects::router())
        .nest("/vendors", vendors::router())
        .nest("/dashboard", dashboard::router())
        .nest("/ai", insights::router())
        .nest("/admin", admin::router())
}
