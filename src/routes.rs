//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                  - Health check (public)
//! - `GET|POST /account`             - Account listing and creation (public)
//! - `POST /transfer`                - Transfer placeholder (public)
//! - `GET|DELETE /account/{id}`      - Single account (`x-jwt-token` required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - JWT in the `x-jwt-token` header on protected routes
//!
//! Rate limiting and path normalization are added in [`crate::server::run`]
//! because they depend on the connection setup.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}
