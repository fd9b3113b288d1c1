//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::{Account, CreateAccountRequest, DeleteAccountResponse, TransferRequest};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorBody;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bankd Account API",
        version = "1.0.0",
        description = "Minimal bank-account CRUD service with a stub transfer endpoint.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::list_accounts,
        crate::gateway::handlers::create_account,
        crate::gateway::handlers::get_account,
        crate::gateway::handlers::delete_account,
        crate::gateway::handlers::transfer,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            Account,
            CreateAccountRequest,
            DeleteAccountResponse,
            TransferRequest,
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Account", description = "Account CRUD operations"),
        (name = "Transfer", description = "Transfer stub (echo only)"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
