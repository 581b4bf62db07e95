use crate::storage::ShoppingListStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShoppingListStore>,
}

impl AppState {
    pub fn new(store: impl ShoppingListStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
