//! Notification collaborator.
//!
//! The ledger invokes the notifier exactly once after a committed transfer,
//! outside the critical section. Fire-and-forget: a notifier failure never
//! rolls back a completed transfer.

use tracing::info;

use crate::account::Account;

/// Contract consumed by the transfer engine.
pub trait Notifier: Send + Sync {
    /// Inform the holder of `account` that a transfer took place.
    fn notify(&self, account: &Account, message: &str);
}

/// Production notifier.
///
/// Email delivery runs out of band; this implementation records the
/// notification in the service log.
#[derive(Debug, Default)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn notify(&self, account: &Account, message: &str) {
        info!(
            account_id = account.id(),
            message, "notifying account holder"
        );
    }
}
