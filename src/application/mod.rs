//! Application layer services implementing business logic.
//!
//! Services consume the storage contract and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Account creation, lookup and removal
//! - [`services::token_service::TokenService`] - Bearer token issuance and validation

pub mod services;
