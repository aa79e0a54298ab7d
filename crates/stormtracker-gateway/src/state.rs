use std::sync::Arc;

use stormtracker_core::StormStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn StormStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StormStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn StormStore {
        self.store.as_ref()
    }
}
