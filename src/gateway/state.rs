use std::sync::Arc;

use crate::ledger::Ledger;
use crate::store::AccountStore;

/// Shared gateway state.
#[derive(Clone)]
pub struct AppState {
    /// Account registry (create/fetch)
    pub store: Arc<AccountStore>,
    /// Transfer engine
    pub ledger: Arc<Ledger>,
}

impl AppState {
    pub fn new(store: Arc<AccountStore>, ledger: Arc<Ledger>) -> Self {
        Self { store, ledger }
    }
}
