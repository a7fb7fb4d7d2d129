//! Gateway request/response types.
//!
//! Request bodies deserialize here and nothing more; all business
//! validation happens in the ledger core. Wire field names follow the
//! public API (camelCase).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LedgerError;

/// Create-account request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: String,
    /// Opening balance; defaults to zero when omitted.
    #[serde(default)]
    #[schema(value_type = String, example = "8000")]
    pub balance: Decimal,
}

/// Transfer request body.
///
/// The account fields are optional so a JSON `null` reaches the core as an
/// empty id (an `INVALID_ACCOUNT` failure) instead of a deserialization
/// error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferAmountRequest {
    #[schema(value_type = String, example = "Id-123")]
    pub from_account_no: Option<String>,
    #[schema(value_type = String, example = "Id-124")]
    pub to_account_no: Option<String>,
    #[schema(value_type = String, example = "10.50")]
    pub amount: Decimal,
}

/// Account view returned by the fetch and create endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub account_id: String,
    #[schema(value_type = String, example = "8000")]
    pub balance: Decimal,
}

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create success response with no payload
    pub fn ok() -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: None,
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_ACCOUNT: i32 = 1001;
    pub const INVALID_AMOUNT: i32 = 1002;
    pub const DUPLICATE_ACCOUNT_ID: i32 = 1003;

    // Resource errors (2xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 2001;
    pub const INSUFFICIENT_FUNDS: i32 = 2002;
    pub const OVERFLOW: i32 = 2003;

    // Server errors (5xxx)
    pub const LOCK_FAILURE: i32 = 5001;
}

/// Map a ledger error onto its stable numeric API code.
pub fn error_code(err: &LedgerError) -> i32 {
    match err {
        LedgerError::InvalidAccount => error_codes::INVALID_ACCOUNT,
        LedgerError::InvalidAmount => error_codes::INVALID_AMOUNT,
        LedgerError::DuplicateAccountId(_) => error_codes::DUPLICATE_ACCOUNT_ID,
        LedgerError::AccountNotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
        LedgerError::InsufficientFunds { .. } => error_codes::INSUFFICIENT_FUNDS,
        LedgerError::Overflow => error_codes::OVERFLOW,
        LedgerError::LockTimeout => error_codes::LOCK_FAILURE,
    }
}
