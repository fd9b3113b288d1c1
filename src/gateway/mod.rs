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
use types::ApiError;

/// Build the application router.
///
/// Method routing per path: /account dispatches GET vs POST, and
/// /account/{id} dispatches GET vs DELETE; any other method on those
/// paths gets axum's 405. Unknown paths fall through to a 404 with the
/// uniform JSON error body.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/account",
            get(handlers::list_accounts).post(handlers::create_account),
        )
        .route(
            "/account/{id}",
            get(handlers::get_account).delete(handlers::delete_account),
        )
        .route("/transfer", post(handlers::transfer))
        .route("/health", get(handlers::health_check))
        .fallback(fallback_404)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Unknown paths still answer with the uniform JSON error body
async fn fallback_404() -> ApiError {
    ApiError::not_found("no such route")
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!("Gateway listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
