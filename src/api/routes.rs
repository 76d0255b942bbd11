//! API route configuration.
//!
//! Routes are split into a public and a protected router so the
//! authentication middleware can be attached to the latter only.

use crate::api::handlers::{
    create_account_handler, delete_account_handler, get_account_handler, list_accounts_handler,
    method_not_allowed_handler, transfer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `GET    /account`   - List accounts
/// - `POST   /account`   - Create an account
/// - `POST   /transfer`  - Echo a transfer request
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/account",
            get(list_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/transfer",
            post(transfer_handler).fallback(method_not_allowed_handler),
        )
}

/// Routes requiring an `x-jwt-token` header.
///
/// # Endpoints
///
/// - `GET    /account/{id}` - Fetch one account
/// - `DELETE /account/{id}` - Delete one account
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/account/{id}",
        get(get_account_handler)
            .delete(delete_account_handler)
            .fallback(method_not_allowed_handler),
    )
}
