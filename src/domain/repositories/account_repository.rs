//! Storage contract for account persistence.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for durable account operations.
///
/// The HTTP layer only talks to storage through this trait. Implementations
/// are shared across concurrent requests and every single mutation must be
/// atomic as seen by concurrent readers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryAccountRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persists a new account and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the account number is already taken.
    ///
    /// Returns [`AppError::Persistence`] if the write cannot complete.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Lists all accounts in insertion order.
    ///
    /// Returns an empty vector when no accounts exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on read failure.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Fetches a single account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account has this id.
    /// Returns [`AppError::Persistence`] on read failure.
    async fn get_by_id(&self, id: i64) -> Result<Account, AppError>;

    /// Removes an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account has this id; the stored
    /// collection is left unchanged.
    /// Returns [`AppError::Persistence`] on write failure.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Replaces the stored fields of an existing account.
    ///
    /// `id` and `created_at` are never changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown ids.
    /// Returns [`AppError::Conflict`] if the new number is already taken.
    /// Returns [`AppError::Persistence`] on write failure.
    async fn update(&self, account: Account) -> Result<Account, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
