//! Handlers for the supplier directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_db::models::vendor::{CreateVendor, Vendor};
use ledger_db::repositories::VendorRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidJson;
use crate::state::AppState;

/// Request body for `POST /vendors`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,
    pub category: Option<String>,
    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

/// GET /api/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Vendor>>> {
    let vendors = VendorRepo::list(&state.pool).await?;
    Ok(Json(vendors))
}

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidJson(input): ValidJson<CreateVendorRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("Vendor name is required".into()).into());
    }

    let vendor = VendorRepo::create(
        &state.pool,
        &CreateVendor {
            name: input.name,
            category: input.category,
            contact_email: input.contact_email,
            phone: input.phone,
        },
    )
    .await?;

    tracing::info!(vendor_id = vendor.id, "Vendor created");
    Ok((StatusCode::CREATED, Json(vendor)))
}
