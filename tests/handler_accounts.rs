mod common;

use account_api::api::dto::account::AccountResponse;
use axum::http::StatusCode;
use common::TOKEN_HEADER;
use serde_json::{Value, json};

// ─── POST /account ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_account_success() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/account")
        .json(&json!({ "first_name": "Ada", "last_name": "Lovelace" }))
        .await;

    response.assert_status_ok();
    let body: AccountResponse = response.json();
    assert_eq!(body.first_name, "Ada");
    assert_eq!(body.last_name, "Lovelace");
    assert_eq!(body.balance, 0);
    assert!(body.id > 0);
    assert!(body.number > 0);
}

#[tokio::test]
async fn test_create_account_response_fields() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/account")
        .json(&json!({ "first_name": "Grace", "last_name": "Hopper" }))
        .await;

    let body: Value = response.json();
    for field in [
        "id",
        "first_name",
        "last_name",
        "number",
        "balance",
        "created_at",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }
}

#[tokio::test]
async fn test_create_account_invalid_json() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/account")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_account_missing_field() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/account")
        .json(&json!({ "first_name": "Ada" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_account_blank_names_not_persisted() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/account")
        .json(&json!({ "first_name": "   ", "last_name": "Lovelace" }))
        .await;

    response.assert_status_bad_request();
    assert!(state.account_service.list_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_account_name_too_long() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/account")
        .json(&json!({ "first_name": "a".repeat(51), "last_name": "Lovelace" }))
        .await;

    response.assert_status_bad_request();
}

// ─── GET /account ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_accounts_empty() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/account").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_accounts_in_creation_order() {
    let state = common::create_test_state();
    common::create_test_account(&state, "Ada", "Lovelace").await;
    common::create_test_account(&state, "Alan", "Turing").await;
    let server = common::make_server(state);

    let body: Vec<AccountResponse> = server.get("/account").await.json();

    assert_eq!(body.len(), 2);
    assert_eq!(body[0].first_name, "Ada");
    assert_eq!(body[1].first_name, "Alan");
}

#[tokio::test]
async fn test_unsupported_method_on_collection() {
    let server = common::make_server(common::create_test_state());

    let response = server.put("/account").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({ "error": "method not allowed PUT" }));
}

// ─── GET /account/{id} ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_account_without_token() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let server = common::make_server(state);

    let response = server.get(&format!("/account/{}", account.id)).await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "invalid token" }));
}

#[tokio::test]
async fn test_get_account_with_garbage_token() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let server = common::make_server(state);

    let response = server
        .get(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, "not-a-jwt")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "invalid token" }));
}

#[tokio::test]
async fn test_get_account_with_token_from_other_secret() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let foreign = account_api::application::services::TokenService::new("other-secret", 60)
        .issue(&account)
        .unwrap();
    let server = common::make_server(state);

    let response = server
        .get(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, foreign.as_str())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_account_with_expired_token() {
    use account_api::application::services::TokenClaims;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let now = chrono::Utc::now().timestamp() as u64;
    let expired = encode(
        &Header::default(),
        &TokenClaims {
            account_number: account.number,
            iat: now - 120,
            exp: now - 60,
        },
        &EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .unwrap();
    let server = common::make_server(state);

    let response = server
        .get(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, expired.as_str())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "invalid token" }));
}

#[tokio::test]
async fn test_get_account_with_valid_token() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state);

    let response = server
        .get(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_ok();
    let body: AccountResponse = response.json();
    assert_eq!(body, AccountResponse::from(account));
}

#[tokio::test]
async fn test_get_account_token_works_for_any_account_when_unscoped() {
    let state = common::create_test_state();
    let ada = common::create_test_account(&state, "Ada", "Lovelace").await;
    let alan = common::create_test_account(&state, "Alan", "Turing").await;
    let token = common::token_for(&state, &ada);
    let server = common::make_server(state);

    let response = server
        .get(&format!("/account/{}", alan.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_get_account_scoped_token_rejected_for_other_account() {
    let state = common::create_scoped_test_state();
    let ada = common::create_test_account(&state, "Ada", "Lovelace").await;
    let alan = common::create_test_account(&state, "Alan", "Turing").await;
    let token = common::token_for(&state, &ada);
    let server = common::make_server(state);

    server
        .get(&format!("/account/{}", alan.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .get(&format!("/account/{}", ada.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_get_account_non_integer_id() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state);

    let response = server
        .get("/account/abc")
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "invalid id given abc" }));
}

#[tokio::test]
async fn test_get_account_not_found() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state);

    let response = server
        .get("/account/9999999")
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unsupported_method_on_single_account() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state);

    let response = server
        .patch(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({ "error": "method not allowed PATCH" }));
}

// ─── DELETE /account/{id} ────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_account_success() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state.clone());

    let response = server
        .delete(&format!("/account/{}", account.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "deleted": account.id }));
    assert!(state.account_service.list_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_account_twice() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state);
    let path = format!("/account/{}", account.id);

    server
        .delete(&path)
        .add_header(TOKEN_HEADER, token.as_str())
        .await
        .assert_status_ok();

    server
        .delete(&path)
        .add_header(TOKEN_HEADER, token.as_str())
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_account_not_found_leaves_store_unchanged() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &account);
    let server = common::make_server(state.clone());

    let response = server
        .delete("/account/9999999")
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status_not_found();
    assert_eq!(state.account_service.list_accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_account_without_token() {
    let state = common::create_test_state();
    let account = common::create_test_account(&state, "Ada", "Lovelace").await;
    let server = common::make_server(state.clone());

    let response = server.delete(&format!("/account/{}", account.id)).await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(state.account_service.list_accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_account_scoped_token_rejected_for_other_account() {
    let state = common::create_scoped_test_state();
    let ada = common::create_test_account(&state, "Ada", "Lovelace").await;
    let alan = common::create_test_account(&state, "Alan", "Turing").await;
    let token = common::token_for(&state, &ada);
    let server = common::make_server(state.clone());

    server
        .delete(&format!("/account/{}", alan.id))
        .add_header(TOKEN_HEADER, token.as_str())
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert_eq!(state.account_service.list_accounts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_account_scoped_missing_id_is_forbidden() {
    let state = common::create_scoped_test_state();
    let ada = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &ada);
    let server = common::make_server(state);

    let response = server
        .get("/account/9999999")
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "invalid token" }));
}

#[tokio::test]
async fn test_delete_account_scoped_missing_id_is_forbidden() {
    let state = common::create_scoped_test_state();
    let ada = common::create_test_account(&state, "Ada", "Lovelace").await;
    let token = common::token_for(&state, &ada);
    let server = common::make_server(state.clone());

    let response = server
        .delete("/account/9999999")
        .add_header(TOKEN_HEADER, token.as_str())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "invalid token" }));
    assert_eq!(state.account_service.list_accounts().await.unwrap().len(), 1);
}
