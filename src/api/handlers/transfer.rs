//! Handler for the transfer endpoint.

use axum::{Json, extract::State};

use crate::api::dto::transfer::TransferRequest;
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a transfer request and echoes it back.
///
/// # Endpoint
///
/// `POST /transfer`
///
/// No balance is moved.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed.
pub async fn transfer_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TransferRequest>,
) -> Result<Json<TransferRequest>, AppError> {
    let transfer = state.account_service.transfer(payload.into()).await?;

    Ok(Json(transfer.into()))
}
