//! bankd - Minimal bank-account CRUD service
//!
//! Two components, composed linearly:
//!
//! - [`gateway`] - HTTP request handlers: method+path dispatch, JSON
//!   (de)serialization, error-to-status mapping
//! - [`account`] - the Storage contract and its PostgreSQL / in-memory
//!   backends
//!
//! Supporting modules: [`config`] (yaml config), [`logging`] (tracing
//! setup), [`db`] (connection pool + schema DDL).

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, AccountStore, MemoryAccountStore, PostgresAccountStore, StoreError};
pub use config::AppConfig;
pub use db::Database;
