//! Ledger Error Types
//!
//! Every account and transfer operation reports failure through
//! [`LedgerError`]. All variants are recoverable; none aborts the process.

use rust_decimal::Decimal;
use thiserror::Error;

/// Typed failure of a store or ledger operation.
///
/// Stable string codes (`code()`) and HTTP status suggestions
/// (`http_status()`) are used by the gateway for consistent API responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // === Validation Errors ===
    #[error("Account id cannot be null or empty")]
    InvalidAccount,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    // === Account Errors ===
    #[error("Account with id {0} does not exist")]
    AccountNotFound(String),

    #[error("Account id {0} already exists")]
    DuplicateAccountId(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Balance arithmetic overflow")]
    Overflow,

    // === Locking Errors ===
    #[error("Unable to acquire locks on both accounts")]
    LockTimeout,
}

impl LedgerError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidAccount => "INVALID_ACCOUNT",
            LedgerError::InvalidAmount => "INVALID_AMOUNT",
            LedgerError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::DuplicateAccountId(_) => "DUPLICATE_ACCOUNT_ID",
            LedgerError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            LedgerError::Overflow => "OVERFLOW",
            LedgerError::LockTimeout => "LOCK_FAILURE",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            LedgerError::InvalidAccount
            | LedgerError::InvalidAmount
            | LedgerError::DuplicateAccountId(_) => 400,
            LedgerError::AccountNotFound(_) => 404,
            LedgerError::InsufficientFunds { .. } | LedgerError::Overflow => 422,
            LedgerError::LockTimeout => 503,
        }
    }
}
