//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SupportConfig;
use crate::store::EntityStore;

/// Application state shared across all handlers.
///
/// Cheap to clone; the inner state is reference-counted.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SupportConfig,
    store: EntityStore,
}

impl AppState {
    /// Build the application state.
    #[must_use]
    pub fn new(config: SupportConfig, store: EntityStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// The service configuration.
    #[must_use]
    pub fn config(&self) -> &SupportConfig {
        &self.inner.config
    }

    /// The entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.inner.store
    }
}
