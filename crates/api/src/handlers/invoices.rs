//! Handlers for receivable and payable invoices.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::invoice::validate_invoice;
use ledger_core::types::DbId;
use ledger_db::models::invoice::{CreateInvoice, Invoice, InvoiceWithProject};
use ledger_db::repositories::{InvoiceRepo, ProjectRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

/// GET /api/invoices
///
/// Every invoice with its project name, soonest due first.
pub async fn list_invoices(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<InvoiceWithProject>>> {
    let invoices = InvoiceRepo::list_with_project(&state.pool).await?;
    Ok(Json(invoices))
}

/// POST /api/invoices
///
/// New invoices start `Pending`. A project id, when given, must exist.
pub async fn create_invoice(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateInvoice>,
) -> AppResult<impl IntoResponse> {
    validate_invoice(&input.vendor_name, input.amount, &input.invoice_type)?;

    if let Some(project_id) = input.project_id {
        if ProjectRepo::find_by_id(&state.pool, project_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into());
        }
    }

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        invoice_id = invoice.id,
        user_id = user.user_id,
        invoice_type = %invoice.invoice_type,
        amount = %invoice.amount,
        "Invoice created"
    );
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PUT /api/invoices/{id}/pay
pub async fn mark_invoice_paid(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::mark_paid(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Invoice",
            id,
        })?;
    tracing::info!(invoice_id = id, user_id = user.user_id, "Invoice marked paid");
    Ok(Json(invoice))
}
