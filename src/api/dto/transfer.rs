//! DTOs for the transfer endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::Transfer;

/// Transfer payload. Echoed back unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferRequest {
    pub to_account: i64,
    pub amount: i64,
}

impl From<TransferRequest> for Transfer {
    fn from(req: TransferRequest) -> Self {
        Self {
            to_account: req.to_account,
            amount: req.amount,
        }
    }
}

impl From<Transfer> for TransferRequest {
    fn from(transfer: Transfer) -> Self {
        Self {
            to_account: transfer.to_account,
            amount: transfer.amount,
        }
    }
}
