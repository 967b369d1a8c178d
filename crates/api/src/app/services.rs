use std::sync::Arc;

use roster_infra::{DocumentStore, InMemoryDocumentStore};

/// Dependencies handed to every endpoint.
///
/// Built once at startup and injected into the router; handlers never reach
/// for a global store.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// In-memory wiring for dev/test.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryDocumentStore::new()))
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn store_handle(&self) -> Arc<dyn DocumentStore> {
        self.store.clone()
    }
}
