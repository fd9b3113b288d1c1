//! bankd - Minimal bank-account CRUD service
//!
//! Startup wiring: args → config → logging → database → gateway.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────┐
//! │  Config  │───▶│ Database │───▶│ AccountStore │───▶│ Gateway  │
//! │  (yaml)  │    │ (PgPool) │    │  (contract)  │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────────┘    └──────────┘
//! ```

use std::sync::Arc;

use bankd::account::{AccountStore, MemoryAccountStore, PostgresAccountStore};
use bankd::config::AppConfig;
use bankd::db::Database;
use bankd::gateway::{run_server, state::AppState};
use bankd::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Run without PostgreSQL, state held in memory only
fn use_memory_mode() -> bool {
    std::env::args().any(|a| a == "--memory")
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = init_logging(&config);

    tracing::info!("Starting bankd in {} mode", env);

    let store: Arc<dyn AccountStore> = if use_memory_mode() {
        println!("⚠️  Running with in-memory store (no persistence)");
        Arc::new(MemoryAccountStore::new())
    } else {
        // Startup failures here are fatal: no retry, no degraded mode
        let db = match Database::connect(&config.postgres_url).await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("FATAL: Failed to connect to PostgreSQL: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = db.health_check().await {
            eprintln!("FATAL: PostgreSQL health check failed: {}", e);
            std::process::exit(1);
        }
        if let Err(e) = db.ensure_schema().await {
            eprintln!("FATAL: Failed to create account schema: {}", e);
            std::process::exit(1);
        }
        Arc::new(PostgresAccountStore::new(db.pool().clone()))
    };

    let state = Arc::new(AppState::new(store));

    let port = get_port_override().unwrap_or(config.gateway.port);
    run_server(&config.gateway.host, port, state).await;
}
