//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{AccountView, CreateAccountRequest, TransferAmountRequest};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledgerd Account API",
        version = "1.0.0",
        description = "Concurrency-safe in-memory account ledger with atomic point-to-point transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_account,
        crate::gateway::handlers::get_account,
        crate::gateway::handlers::transfer_amount,
    ),
    components(schemas(
        HealthResponse,
        AccountView,
        CreateAccountRequest,
        TransferAmountRequest,
    )),
    tags(
        (name = "Accounts", description = "Account creation, lookup, and transfers"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/v1/health"));
        assert!(paths.contains_key("/v1/accounts"));
        assert!(paths.contains_key("/v1/accounts/{account_id}"));
        assert!(paths.contains_key("/v1/accounts/transfer"));
    }
}
