//! JSON body extractor with the API's error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use ledger_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like [`axum::Json`], but a malformed or mistyped body is rejected as a
/// 400 `VALIDATION_ERROR` in the usual `{error, code}` body instead of
/// axum's plain-text 4xx.
///
/// ```ignore
/// async fn create(ValidJson(input): ValidJson<CreateProduct>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(invalid_body(rejection)),
        }
    }
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    AppError::Core(CoreError::Validation(rejection.body_text()))
}
