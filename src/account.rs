//! Account and enforced balance type.
//!
//! [`Funds`] is the single source of truth for balance arithmetic.
//! All mutations are validated, use checked arithmetic, and return `Result`.
//!
//! # Enforcement Strategy:
//! 1. Fields are PRIVATE - no direct access
//! 2. `Funds` is only reachable through the account's mutex, so a caller
//!    cannot mutate a balance without holding that account's lock
//! 3. Withdraw/deposit are NOT independently thread-safe primitives; the
//!    transfer engine is the lock-holding orchestrator

use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;
use std::time::Duration;

use crate::error::LedgerError;

/// Reject amounts that are not strictly positive.
pub(crate) fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Balance of a single account.
///
/// # Invariants (enforced by the private field):
/// - never negative after any completed operation
/// - no overflow (checked arithmetic, overflow is a typed error)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Funds {
    amount: Decimal,
}

impl Funds {
    fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Current amount (read-only)
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Credit `amount` to the balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount <= 0`
    /// - `Overflow` if the checked add fails
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        validate_amount(amount)?;
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Debit `amount` from the balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if the balance is below `amount`
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        validate_amount(amount)?;
        if self.amount < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.amount,
            });
        }
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}

/// A uniquely identified balance holder.
///
/// The id is immutable after creation. The balance lives behind a
/// per-account mutex; the transfer engine acquires pairs of these locks in
/// a fixed global order.
#[derive(Debug)]
pub struct Account {
    id: String,
    funds: Mutex<Funds>,
}

impl Account {
    /// Create an account with an opening balance.
    ///
    /// # Errors
    /// - `InvalidAccount` if the id is empty
    /// - `InvalidAmount` if the opening balance is negative
    pub fn new(id: impl Into<String>, balance: Decimal) -> Result<Self, LedgerError> {
        let id = id.into();
        if id.is_empty() {
            return Err(LedgerError::InvalidAccount);
        }
        if balance.is_sign_negative() {
            return Err(LedgerError::InvalidAmount);
        }
        Ok(Self {
            id,
            funds: Mutex::new(Funds::new(balance)),
        })
    }

    /// Read-only access to the account id
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current balance. Takes the account lock briefly, so concurrent
    /// readers never observe a torn value.
    pub fn balance(&self) -> Decimal {
        self.funds.lock().amount()
    }

    /// Acquire this account's balance lock, waiting at most `timeout`.
    /// Returns `None` on timeout.
    pub(crate) fn try_lock_for(&self, timeout: Duration) -> Option<MutexGuard<'_, Funds>> {
        self.funds.try_lock_for(timeout)
    }
}
