//! Application state shared across handlers.

use std::sync::Arc;

use solestore_core::catalog::CatalogStore;
use solestore_core::orders::OrderStore;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration plus the in-memory
/// catalog and order stores this process administers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: CatalogStore,
    orders: OrderStore,
}

impl AppState {
    /// Create application state over the given stores.
    #[must_use]
    pub fn new(config: AdminConfig, catalog: CatalogStore, orders: OrderStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
            }),
        }
    }

    /// Create application state with the seeded mock stores.
    #[must_use]
    pub fn seeded(config: AdminConfig) -> Self {
        Self::new(config, CatalogStore::seeded(), OrderStore::seeded())
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }
}
