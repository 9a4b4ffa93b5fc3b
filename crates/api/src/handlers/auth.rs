//! Handlers for the `/auth` resource (signup, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::types::DbId;
use ledger_db::models::user::{CreateUser, User};
use ledger_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::json::ValidJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// New accounts always start with the default role.
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let email = input.email.trim().to_lowercase();
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::BadRequest("User already exists".into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created!",
            user,
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password get the same 400 response.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || AppError::BadRequest("Invalid email or password".into());

    let user = UserRepo::find_by_email(&state.pool, &input.email.trim().to_lowercase())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let token = generate_access_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}
