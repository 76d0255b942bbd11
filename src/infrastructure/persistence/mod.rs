//! Account repository implementations.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryAccountRepository`] - process-local storage for tests and tooling

pub mod in_memory_account_repository;
pub mod pg_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
pub use pg_account_repository::PgAccountRepository;
