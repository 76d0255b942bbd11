#![allow(dead_code)]

use account_api::application::services::TokenService;
use account_api::domain::entities::Account;
use account_api::infrastructure::persistence::InMemoryAccountRepository;
use account_api::routes::app_router;
use account_api::state::AppState;
use axum_test::TestServer;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TOKEN_HEADER: &str = "x-jwt-token";

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryAccountRepository::new()),
        TokenService::new(TEST_SECRET, 60),
    )
}

pub fn create_scoped_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryAccountRepository::new()),
        TokenService::new(TEST_SECRET, 60).with_account_scope(true),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn create_test_account(state: &AppState, first: &str, last: &str) -> Account {
    state
        .account_service
        .create_account(first, last)
        .await
        .unwrap()
}

pub fn token_for(state: &AppState, account: &Account) -> String {
    state.token_service.issue(account).unwrap()
}
