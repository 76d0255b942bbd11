//! PostgreSQL implementation of the account repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::{AppError, map_sqlx_error};
use crate::utils::db_error::is_unique_violation_on_number;

/// Row shape of the `account` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    first_name: String,
    last_name: String,
    number: i64,
    balance: i64,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::new(
            row.id,
            row.first_name,
            row.last_name,
            row.number,
            row.balance,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for account storage.
///
/// Every operation is a single statement, so concurrent readers never observe
/// a partial write. The pool is shared by all in-flight requests.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, number: i64) -> AppError {
    if is_unique_violation_on_number(&e) {
        return AppError::conflict(format!("account number {number} already in use"));
    }
    map_sqlx_error(e)
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let number = new_account.number;

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(new_account.number)
        .bind(new_account.balance)
        .bind(new_account.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, number))?;

        tracing::debug!(id = row.id, number, "Inserted account");

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Account::from)
            .ok_or_else(|| AppError::not_found(format!("account {id} not found")))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("account {id} not found")));
        }

        Ok(())
    }

    async fn update(&self, account: Account) -> Result<Account, AppError> {
        let number = account.number;

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE account
            SET first_name = $2,
                last_name = $3,
                number = $4,
                balance = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(account.id)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, number))?;

        row.map(Account::from)
            .ok_or_else(|| AppError::not_found(format!("account {} not found", account.id)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
