//! Token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the bearer token on protected routes.
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Authenticates requests using the token in the `x-jwt-token` header.
///
/// # Header Format
///
/// ```text
/// x-jwt-token: <jwt>
/// ```
///
/// # Authentication Flow
///
/// 1. Read the token from the `x-jwt-token` header
/// 2. Verify signature, algorithm and expiry
/// 3. Attach the decoded [`crate::application::services::TokenClaims`] to the
///    request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `403 Forbidden` with `{"error": "invalid token"}` if the header is
/// missing or the token does not validate. The handler is never invoked.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/account/{id}", get(get_account_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::invalid_token("missing x-jwt-token header"))?;

    let claims = st.token_service.validate(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
