//! Account management module
//!
//! PostgreSQL-backed storage for the account table, plus an in-memory
//! backend with the same semantics for tests and simulation mode.

pub mod memory;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use memory::MemoryAccountStore;
pub use models::{Account, CreateAccountRequest, DeleteAccountResponse, TransferRequest};
pub use store::{AccountStore, PostgresAccountStore, StoreError};

// Re-export Database from top-level db module
pub use crate::db::Database;
