use std::sync::Arc;

use crate::account::AccountStore;

/// Shared gateway state. Handlers hold no mutable state of their own;
/// everything durable lives behind the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}
