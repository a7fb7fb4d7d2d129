//! Transfer engine.
//!
//! Executes point-to-point transfers atomically across two independently
//! locked accounts. Both locks are always acquired in ascending account-id
//! order, so opposite-direction transfers on the same pair cannot form a
//! circular wait. Unrelated account pairs never contend - there is no
//! engine-wide lock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::MutexGuard;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::account::{Account, Funds, validate_amount};
use crate::error::LedgerError;
use crate::notifier::Notifier;
use crate::store::AccountStore;

/// Default bound on each lock acquisition.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Orchestrates withdraw/deposit pairs against two accounts.
///
/// The ledger never holds balances of its own; it operates on handles
/// resolved through the [`AccountStore`] for the duration of one transfer.
pub struct Ledger {
    store: Arc<AccountStore>,
    notifier: Arc<dyn Notifier>,
    lock_timeout: Duration,
}

impl Ledger {
    /// Create a ledger with the default lock timeout.
    pub fn new(store: Arc<AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_lock_timeout(store, notifier, DEFAULT_LOCK_TIMEOUT)
    }

    /// Create a ledger with an explicit bound on each lock acquisition.
    pub fn with_lock_timeout(
        store: Arc<AccountStore>,
        notifier: Arc<dyn Notifier>,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            lock_timeout,
        }
    }

    /// The store backing this ledger.
    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    /// Move `amount` from `from_id` to `to_id` as one atomic operation.
    ///
    /// On success the source balance decreases and the destination balance
    /// increases by exactly `amount`, and the notifier is invoked once with
    /// the source account. On any failure neither balance differs from its
    /// pre-call value and no notification is sent.
    ///
    /// # Errors
    /// - `InvalidAmount` - `amount` is not strictly positive
    /// - `InvalidAccount` - an id is empty, or `from_id == to_id`
    /// - `AccountNotFound` - either id is absent from the store
    /// - `InsufficientFunds` - source balance below `amount`
    /// - `Overflow` - destination balance cannot represent the result
    /// - `LockTimeout` - both locks could not be acquired within the bound
    pub fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        // All validation happens before any lock is taken.
        validate_amount(amount)?;

        let from = self.store.get(from_id)?;
        let to = self.store.get(to_id)?;

        // A self-transfer would double-lock a single account; reject it.
        if from.id() == to.id() {
            return Err(LedgerError::InvalidAccount);
        }

        let (mut src, mut dst) = lock_pair(&from, &to, self.lock_timeout)?;

        if let Err(e) = src.withdraw(amount) {
            warn!(
                from = from.id(),
                to = to.id(),
                %amount,
                error = %e,
                "transfer rejected"
            );
            return Err(e);
        }

        if let Err(e) = dst.deposit(amount) {
            // Credit the withdrawn amount back before releasing the locks,
            // so a failed transfer leaves every balance as it was.
            if let Err(restore) = src.deposit(amount) {
                // Unreachable: the same amount was withdrawn a moment ago.
                error!(
                    account = from.id(),
                    error = %restore,
                    "rollback credit failed"
                );
            }
            warn!(
                from = from.id(),
                to = to.id(),
                %amount,
                error = %e,
                "transfer rolled back"
            );
            return Err(e);
        }

        let from_balance = src.amount();
        let to_balance = dst.amount();
        drop(dst);
        drop(src);

        info!(
            from = from.id(),
            to = to.id(),
            %amount,
            from_balance = %from_balance,
            to_balance = %to_balance,
            "transfer committed"
        );

        // Locks are already released: notification is not part of the
        // financial invariant and must not stall contending transfers.
        self.notifier.notify(
            &from,
            &format!(
                "Amount {} transferred from account {} to account {}",
                amount,
                from.id(),
                to.id()
            ),
        );

        Ok(())
    }
}

/// Deterministic lock order for a pair of accounts: ascending account id.
///
/// Every transfer agrees on this order regardless of the direction the
/// caller requested, which removes circular waits between opposite
/// transfers on the same pair.
pub(crate) fn lock_order<'a>(a: &'a Account, b: &'a Account) -> (&'a Account, &'a Account) {
    if a.id() <= b.id() { (a, b) } else { (b, a) }
}

/// Acquire both account locks in the global order, returning the guards in
/// `(from, to)` role order. Each acquisition waits at most `timeout`, so
/// the worst-case wait for a transfer is twice that bound.
fn lock_pair<'a>(
    from: &'a Account,
    to: &'a Account,
    timeout: Duration,
) -> Result<(MutexGuard<'a, Funds>, MutexGuard<'a, Funds>), LedgerError> {
    let (first, second) = lock_order(from, to);

    let first_guard = first
        .try_lock_for(timeout)
        .ok_or(LedgerError::LockTimeout)?;
    let second_guard = second
        .try_lock_for(timeout)
        .ok_or(LedgerError::LockTimeout)?;

    if std::ptr::eq(first, from) {
        Ok((first_guard, second_guard))
    } else {
        Ok((second_guard, first_guard))
    }
}
