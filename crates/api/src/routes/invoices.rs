//! Route definitions for invoices.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
///
/// ```text
/// GET  /            -> list_invoices
/// POST /            -> create_invoice
/// PUT  /{id}/pay    -> mark_invoice_paid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoices::list_invoices).post(invoices::create_invoice))
        .route("/{id}/pay", put(invoices::mark_invoice_paid))
}
