//! Account entity representing a bank-style account record.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Upper bound (exclusive) for generated account numbers.
pub const ACCOUNT_NUMBER_MAX: i64 = 1_000_000;

/// A persisted account.
///
/// `id` is assigned by the storage engine; every other field is set when the
/// account is constructed through [`NewAccount::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates an Account from its stored fields.
    pub fn new(
        id: i64,
        first_name: String,
        last_name: String,
        number: i64,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            number,
            balance,
            created_at,
        }
    }

    /// Combines an unsaved account with the id assigned on insert.
    pub fn from_new(id: i64, new_account: NewAccount) -> Self {
        Self {
            id,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            number: new_account.number,
            balance: new_account.balance,
            created_at: new_account.created_at,
        }
    }
}

/// An account that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Builds a new account with a random number, zero balance and the
    /// current UTC time.
    ///
    /// Numbers are drawn from `1..ACCOUNT_NUMBER_MAX` without checking for
    /// collisions; the storage layer enforces uniqueness.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: generate_account_number(),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Draws a random, non-zero account number.
pub fn generate_account_number() -> i64 {
    rand::rng().random_range(1..ACCOUNT_NUMBER_MAX)
}
