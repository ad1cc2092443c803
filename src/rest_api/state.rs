//! Shared router state

use crate::store::{CollectionHandle, SharedStore};

/// State handed to every handler
#[derive(Clone)]
pub struct GatewayState {
    store: SharedStore,
}

impl GatewayState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Bind a collection by name for the current request
    pub fn collection(&self, name: &str) -> CollectionHandle {
        CollectionHandle::new(self.store.clone(), name)
    }
}
