//! Storage contract for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_account.rs` for usage examples.

pub mod account_repository;

pub use account_repository::AccountRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
