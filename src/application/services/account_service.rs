//! Account creation, lookup and removal service.

use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Attempts at drawing an unused account number before giving up.
const MAX_NUMBER_ATTEMPTS: usize = 10;

/// A requested transfer between accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub to_account: i64,
    pub amount: i64,
}

/// Service orchestrating account operations on top of the storage contract.
///
/// Handlers never touch the repository directly. The service validates input,
/// allocates account numbers and forwards everything else to the repository
/// unchanged.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Creates and persists an account.
    ///
    /// Leading and trailing whitespace is stripped from both names. If the
    /// random account number collides with an existing one a new number is
    /// drawn, up to [`MAX_NUMBER_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either name is blank; nothing is
    /// persisted in that case.
    ///
    /// Returns [`AppError::Persistence`] if the write fails or no free account
    /// number was found.
    pub async fn create_account(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Account, AppError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::validation(
                "both first_name and last_name are required",
            ));
        }

        for _ in 0..MAX_NUMBER_ATTEMPTS {
            let new_account = NewAccount::new(first_name, last_name);
            let number = new_account.number;

            match self.repository.create(new_account).await {
                Ok(account) => {
                    tracing::info!(id = account.id, number = account.number, "Account created");
                    return Ok(account);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(number, "Account number collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::persistence("failed to allocate a unique account number"))
    }

    /// Lists all accounts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn get_account(&self, id: i64) -> Result<Account, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Deletes an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Account deleted");
        Ok(())
    }

    /// Replaces the stored fields of an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either name is blank.
    /// Returns [`AppError::NotFound`] if the account does not exist.
    pub async fn update_account(&self, account: Account) -> Result<Account, AppError> {
        if account.first_name.trim().is_empty() || account.last_name.trim().is_empty() {
            return Err(AppError::validation(
                "both first_name and last_name are required",
            ));
        }

        self.repository.update(account).await
    }

    /// Accepts a transfer request.
    ///
    /// Balances are not moved: the request is returned unchanged.
    pub async fn transfer(&self, transfer: Transfer) -> Result<Transfer, AppError> {
        tracing::info!(
            to_account = transfer.to_account,
            amount = transfer.amount,
            "Transfer accepted (not executed)"
        );
        Ok(transfer)
    }

    /// Checks that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if it is not.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
