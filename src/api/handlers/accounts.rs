//! Handlers for account endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::Method,
};
use validator::Validate;

use crate::api::dto::account::{AccountResponse, CreateAccountRequest, DeleteAccountResponse};
use crate::api::extract::{ApiJson, parse_account_id};
use crate::application::services::TokenClaims;
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all accounts.
///
/// # Endpoint
///
/// `GET /account`
///
/// # Response
///
/// A JSON array in insertion order; `[]` when no accounts exist.
pub async fn list_accounts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = state.account_service.list_accounts().await?;

    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Creates an account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "first_name": "Ada", "last_name": "Lovelace" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or a name is blank.
pub async fn create_account_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    payload.validate()?;

    let account = state
        .account_service
        .create_account(&payload.first_name, &payload.last_name)
        .await?;

    Ok(Json(account.into()))
}

/// Fetches one account by id.
///
/// # Endpoint
///
/// `GET /account/{id}` (requires `x-jwt-token`)
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 403 Forbidden if account scoping is enabled and the token belongs
/// to another account, or the account doesn't exist.
/// Returns 404 Not Found if scoping is disabled and the account doesn't exist.
pub async fn get_account_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<AccountResponse>, AppError> {
    let id = parse_account_id(&raw_id)?;

    let account = load_authorized(&state, &claims, id).await?;

    Ok(Json(account.into()))
}

/// Deletes one account by id.
///
/// # Endpoint
///
/// `DELETE /account/{id}` (requires `x-jwt-token`)
///
/// # Response
///
/// ```json
/// { "deleted": 17 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 403 Forbidden if account scoping is enabled and the token belongs
/// to another account, or the account doesn't exist.
/// Returns 404 Not Found if scoping is disabled and the account doesn't
/// exist; nothing is removed.
pub async fn delete_account_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let id = parse_account_id(&raw_id)?;

    if state.token_service.is_scoped_to_account() {
        load_authorized(&state, &claims, id).await?;
    }

    state.account_service.delete_account(id).await?;

    Ok(Json(DeleteAccountResponse { deleted: id }))
}

/// Loads an account and checks the token may access it.
///
/// With account scoping enabled an absent id is reported as
/// [`AppError::InvalidToken`], the same as a token bound to another account.
async fn load_authorized(
    state: &AppState,
    claims: &TokenClaims,
    id: i64,
) -> Result<Account, AppError> {
    let account = match state.account_service.get_account(id).await {
        Ok(account) => account,
        Err(AppError::NotFound { message }) if state.token_service.is_scoped_to_account() => {
            return Err(AppError::invalid_token(message));
        }
        Err(e) => return Err(e),
    };

    state.token_service.authorize(claims, &account)?;

    Ok(account)
}

/// Fallback for verbs a route does not support.
pub async fn method_not_allowed_handler(method: Method) -> AppError {
    AppError::method_not_allowed(method)
}
