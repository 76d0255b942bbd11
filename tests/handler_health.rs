mod common;

use account_api::application::services::TokenService;
use account_api::domain::entities::{Account, NewAccount};
use account_api::domain::repositories::AccountRepository;
use account_api::error::AppError;
use account_api::state::AppState;
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// Storage that is never reachable.
struct UnreachableRepository;

#[async_trait]
impl AccountRepository for UnreachableRepository {
    async fn create(&self, _new_account: NewAccount) -> Result<Account, AppError> {
        Err(AppError::persistence("database error"))
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        Err(AppError::persistence("database error"))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Account, AppError> {
        Err(AppError::persistence("database error"))
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        Err(AppError::persistence("database error"))
    }

    async fn update(&self, _account: Account) -> Result<Account, AppError> {
        Err(AppError::persistence("database error"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::persistence("database error"))
    }
}

fn unreachable_state() -> AppState {
    AppState::new(
        Arc::new(UnreachableRepository),
        TokenService::new(common::TEST_SECRET, 60),
    )
}

#[tokio::test]
async fn test_health_check_success() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["ok"], true);
}

#[tokio::test]
async fn test_health_check_includes_version() {
    let server = common::make_server(common::create_test_state());

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_check_degraded() {
    let server = common::make_server(unreachable_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["storage"]["ok"], false);
    assert_eq!(body["checks"]["storage"]["error"], "database error");
}

#[tokio::test]
async fn test_storage_failure_maps_to_500() {
    let server = common::make_server(unreachable_state());

    let response = server.get("/account").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "database error");
}
