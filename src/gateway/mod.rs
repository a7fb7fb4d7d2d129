//! HTTP gateway.
//!
//! Thin axum adapter over the ledger core. Routes deserialize, delegate to
//! the store or the transfer engine, and map typed errors onto HTTP
//! statuses; no business logic lives at this layer.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the gateway router.
///
/// Split out from [`run_server`] so handler-level tests can drive the full
/// router without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/accounts", post(handlers::create_account))
        // The static transfer route must be registered alongside the
        // `{account_id}` capture; axum prefers the literal match.
        .route("/v1/accounts/transfer", post(handlers::transfer_amount))
        .route("/v1/accounts/{account_id}", get(handlers::get_account))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve the gateway until the process is stopped.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("api docs at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
