//! ledgerd - Concurrency-Safe Account Ledger
//!
//! An in-memory account ledger that supports account creation, balance
//! lookup, and atomic point-to-point transfers under concurrent access.
//! Transfers acquire per-account locks in a fixed global order, so
//! opposite-direction transfers on the same pair never deadlock, and the
//! total balance across all accounts is conserved by every operation.
//!
//! # Modules
//!
//! - [`account`] - Account identity and the enforced balance type
//! - [`store`] - Concurrent account registry
//! - [`ledger`] - Transfer engine (ordered locking, rollback, notification)
//! - [`notifier`] - Notification collaborator contract
//! - [`error`] - Typed error taxonomy
//! - [`gateway`] - Thin axum HTTP adapter
//! - [`config`] / [`logging`] - Application shell

pub mod account;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod notifier;
pub mod store;

// Convenient re-exports at crate root
pub use account::Account;
pub use error::LedgerError;
pub use ledger::Ledger;
pub use notifier::{EmailNotifier, Notifier};
pub use store::AccountStore;
