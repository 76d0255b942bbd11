use std::sync::Arc;

use crate::application::services::{AccountService, TokenService};
use crate::domain::repositories::AccountRepository;

/// Shared state injected into every handler.
///
/// Cloning is cheap: both services sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Builds the state from a storage backend and a configured token service.
    pub fn new(repository: Arc<dyn AccountRepository>, token_service: TokenService) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(repository)),
            token_service: Arc::new(token_service),
        }
    }
}
