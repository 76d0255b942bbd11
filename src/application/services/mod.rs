//! Business logic services for the application layer.

pub mod account_service;
pub mod token_service;

pub use account_service::{AccountService, Transfer};
pub use token_service::{TokenClaims, TokenService};
