//! DTOs for account endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Account;

/// Request to create an account.
///
/// Blank names are rejected by the service; the DTO only bounds the length to
/// the width of the storage columns.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(max = 50, message = "first_name must be at most 50 characters"))]
    pub first_name: String,

    #[validate(length(max = 50, message = "last_name must be at most 50 characters"))]
    pub last_name: String,
}

/// JSON representation of an account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            number: account.number,
            balance: account.balance,
            created_at: account.created_at,
        }
    }
}

/// Response body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub deleted: i64,
}
