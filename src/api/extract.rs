//! Request extractors that report failures as [`AppError`].
//!
//! Axum's built-in rejections answer with plain-text bodies. These wrappers
//! keep every failure in the `{"error": ...}` shape.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON body extractor whose rejection is [`AppError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Parses an account id taken from the request path.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if `raw` is not an integer.
pub fn parse_account_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("invalid id given {raw}")))
}
