//! Process-local implementation of the account repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    accounts: BTreeMap<i64, Account>,
}

/// In-memory account store.
///
/// Mirrors the PostgreSQL schema rules: ids are assigned sequentially starting
/// at 1, account numbers are unique, and listing is ordered by id. All state
/// sits behind one lock, so each operation is atomic.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    inner: RwLock<Inner>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn number_taken(accounts: &BTreeMap<i64, Account>, number: i64, except_id: Option<i64>) -> bool {
    accounts
        .values()
        .any(|a| a.number == number && Some(a.id) != except_id)
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;

        if number_taken(&inner.accounts, new_account.number, None) {
            return Err(AppError::conflict(format!(
                "account number {} already in use",
                new_account.number
            )));
        }

        inner.next_id += 1;
        let account = Account::from_new(inner.next_id, new_account);
        inner.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Account, AppError> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("account {id} not found")))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("account {id} not found")))
    }

    async fn update(&self, account: Account) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;

        if !inner.accounts.contains_key(&account.id) {
            return Err(AppError::not_found(format!("account {} not found", account.id)));
        }

        if number_taken(&inner.accounts, account.number, Some(account.id)) {
            return Err(AppError::conflict(format!(
                "account number {} already in use",
                account.number
            )));
        }

        let stored = inner
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| AppError::not_found(format!("account {} not found", account.id)))?;

        stored.first_name = account.first_name;
        stored.last_name = account.last_name;
        stored.number = account.number;
        stored.balance = account.balance;

        Ok(stored.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
