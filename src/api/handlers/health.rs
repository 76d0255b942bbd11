//! Liveness and storage reachability probe.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse, ServiceStatus};
use crate::state::AppState;

/// `GET /health`
///
/// Answers `200` when the storage backend responds to a ping and `503`
/// otherwise. The route is public.
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "checks": { "storage": { "ok": true } } }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let storage = match state.account_service.check_storage().await {
        Ok(()) => ComponentCheck::passed(),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            ComponentCheck::failed(e.to_string())
        }
    };

    let (code, status) = if storage.ok {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { storage },
    };

    (code, Json(body)).into_response()
}
