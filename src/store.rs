//! Concurrent account registry.
//!
//! DashMap-backed store; `create` is an atomic check-and-insert, so two
//! concurrent creations with the same id can never both succeed. The store
//! owns account identity only - balance mutations are coordinated by the
//! transfer engine, not here.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::account::Account;
use crate::error::LedgerError;

/// Thread-safe registry of accounts, keyed by account id.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Arc<Account>>,
}

impl AccountStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Register a new account.
    ///
    /// The existence check and the insert are a single atomic operation on
    /// the underlying map shard.
    ///
    /// # Errors
    /// - `DuplicateAccountId` if an account with the same id already exists
    pub fn create(&self, account: Account) -> Result<(), LedgerError> {
        match self.accounts.entry(account.id().to_string()) {
            Entry::Occupied(entry) => Err(LedgerError::DuplicateAccountId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(account));
                Ok(())
            }
        }
    }

    /// Fetch a handle to an account.
    ///
    /// # Errors
    /// - `InvalidAccount` if the id is empty
    /// - `AccountNotFound` if no account with that id exists
    pub fn get(&self, id: &str) -> Result<Arc<Account>, LedgerError> {
        if id.is_empty() {
            return Err(LedgerError::InvalidAccount);
        }
        self.accounts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    /// Remove all accounts.
    ///
    /// Test/reset only. Not safe to call concurrently with live transfers.
    pub fn clear(&self) {
        self.accounts.clear();
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all balances.
    ///
    /// Locks each account briefly; the result is only a consistent snapshot
    /// when no transfers are in flight.
    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .iter()
            .map(|entry| entry.value().balance())
            .sum()
    }
}
