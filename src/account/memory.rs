//! In-memory store backend
//!
//! Same observable semantics as the PostgreSQL store: monotonic ids
//! starting at 1, idempotent delete, NotFound on missing ids. Used by
//! the end-to-end test suite and by `--memory` simulation mode.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use super::models::Account;
use super::store::{AccountStore, StoreError};

#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
    id_gen: AtomicI64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create_account(&self, account: &Account) -> Result<Account, StoreError> {
        let mut stored = account.clone();
        stored.id = self.id_gen.fetch_add(1, Ordering::SeqCst) + 1;
        self.accounts
            .write()
            .expect("account lock poisoned")
            .push(stored.clone());
        Ok(stored)
    }

    async fn delete_account(&self, id: i64) -> Result<(), StoreError> {
        self.accounts
            .write()
            .expect("account lock poisoned")
            .retain(|a| a.id != id);
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().expect("account lock poisoned");
        let existing = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(StoreError::NotFound(account.id))?;
        existing.first_name = account.first_name.clone();
        existing.last_name = account.last_name.clone();
        existing.balance = account.balance;
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, StoreError> {
        // Insertion order is id order
        Ok(self.accounts.read().expect("account lock poisoned").clone())
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Account, StoreError> {
        self.accounts
            .read()
            .expect("account lock poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
