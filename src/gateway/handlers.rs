//! Gateway handlers.
//!
//! Thin adapters over the ledger core: deserialize, delegate, map typed
//! errors onto HTTP statuses. No business logic lives here.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa::ToSchema;

use crate::account::Account;
use crate::error::LedgerError;

use super::state::AppState;
use super::types::{
    AccountView, ApiResponse, CreateAccountRequest, TransferAmountRequest, error_code,
};

/// Map a ledger error onto the unified response envelope.
fn error_response<T>(e: &LedgerError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status =
        StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::error(error_code(e), e.to_string())))
}

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Number of registered accounts
    pub accounts: usize,
}

/// Health check endpoint
///
/// GET /v1/health
#[utoipa::path(
    get,
    path = "/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    (
        StatusCode::OK,
        Json(ApiResponse::success(HealthResponse {
            timestamp_ms,
            accounts: state.store.len(),
        })),
    )
}

/// Create account endpoint
///
/// POST /v1/accounts
#[utoipa::path(
    post,
    path = "/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", content_type = "application/json"),
        (status = 400, description = "Invalid id, negative balance, or duplicate id")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> (StatusCode, Json<ApiResponse<AccountView>>) {
    tracing::info!(account_id = %req.account_id, "creating account");

    let account = match Account::new(req.account_id, req.balance) {
        Ok(account) => account,
        Err(e) => return error_response(&e),
    };

    let view = AccountView {
        account_id: account.id().to_string(),
        balance: account.balance(),
    };

    match state.store.create(account) {
        Ok(()) => (StatusCode::CREATED, Json(ApiResponse::success(view))),
        Err(e) => error_response(&e),
    }
}

/// Fetch account endpoint
///
/// GET /v1/accounts/{account_id}
#[utoipa::path(
    get,
    path = "/v1/accounts/{account_id}",
    params(
        ("account_id" = String, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account id and balance", content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<AccountView>>) {
    tracing::info!(account_id = %account_id, "retrieving account");

    match state.store.get(&account_id) {
        Ok(account) => (
            StatusCode::OK,
            Json(ApiResponse::success(AccountView {
                account_id: account.id().to_string(),
                balance: account.balance(),
            })),
        ),
        Err(e) => error_response(&e),
    }
}

/// Transfer endpoint
///
/// POST /v1/accounts/transfer
#[utoipa::path(
    post,
    path = "/v1/accounts/transfer",
    request_body = TransferAmountRequest,
    responses(
        (status = 200, description = "Transfer completed", content_type = "application/json"),
        (status = 400, description = "Invalid account or amount"),
        (status = 404, description = "Account not found"),
        (status = 422, description = "Insufficient funds"),
        (status = 503, description = "Lock acquisition timed out")
    ),
    tag = "Accounts"
)]
pub async fn transfer_amount(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferAmountRequest>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let from = req.from_account_no.as_deref().unwrap_or("");
    let to = req.to_account_no.as_deref().unwrap_or("");
    tracing::info!(from, to, amount = %req.amount, "transfer requested");

    match state.ledger.transfer(from, to, req.amount) {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::ok())),
        Err(e) => error_response(&e),
    }
}
